use {
    crate::{ClassificationError, EmotionLabel},
    video::Frame,
};

/// What a classifier makes of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub label: Option<EmotionLabel>,
    /// Frame for display, usually the input with detections drawn on it.
    pub annotated: Frame,
}

impl ClassificationResult {
    pub fn new(label: Option<EmotionLabel>, annotated: Frame) -> Self {
        Self { label, annotated }
    }

    /// The input frame passed through with no label.
    pub fn unlabeled(frame: Frame) -> Self {
        Self {
            label: None,
            annotated: frame,
        }
    }
}

/// Pluggable frame classifier.
///
/// Calls may be slow, up to a full tick. `&mut self` keeps them strictly
/// one at a time; implementations need not be re-entrant.
pub trait Classifier: Send {
    fn classify(&mut self, frame: &Frame) -> Result<ClassificationResult, ClassificationError>;
}

/// Classifier backed by a closure, see [`from_fn`].
pub struct FnClassifier<F>(F);

/// Wrap a closure as a [`Classifier`].
pub fn from_fn<F>(f: F) -> FnClassifier<F>
where
    F: FnMut(&Frame) -> Result<ClassificationResult, ClassificationError> + Send,
{
    FnClassifier(f)
}

impl<F> Classifier for FnClassifier<F>
where
    F: FnMut(&Frame) -> Result<ClassificationResult, ClassificationError> + Send,
{
    fn classify(&mut self, frame: &Frame) -> Result<ClassificationResult, ClassificationError> {
        (self.0)(frame)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn classify(&mut self, frame: &Frame) -> Result<ClassificationResult, ClassificationError> {
        (**self).classify(frame)
    }
}

/// Classify `frame`, folding any failure into an unlabeled result.
pub fn classify_or_unlabeled<C: Classifier + ?Sized>(
    classifier: &mut C,
    frame: Frame,
) -> ClassificationResult {
    match classifier.classify(&frame) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("classifier failed, treating as no label: {}", e);
            ClassificationResult::unlabeled(frame)
        }
    }
}
