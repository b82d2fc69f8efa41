use {
    std::{fmt, str::FromStr},
    thiserror::Error,
};

/// Facial expression reported by a classifier.
///
/// "No face detected" is not a label; it is `Option::<EmotionLabel>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionLabel {
    Neutral,
    Happy,
    Sad,
    Angry,
    Disgust,
    Fear,
    Surprise,
}

impl EmotionLabel {
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Neutral,
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Surprise,
    ];

    /// Labels in FER-2013 output order, as emitted by mini-Xception style models.
    pub const FER_ORDER: [EmotionLabel; 7] = [
        EmotionLabel::Angry,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Surprise,
        EmotionLabel::Neutral,
    ];

    /// Angry, disgust, fear and sad unlock the reactive content.
    pub fn is_distressed(&self) -> bool {
        matches!(
            self,
            EmotionLabel::Angry | EmotionLabel::Disgust | EmotionLabel::Fear | EmotionLabel::Sad
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Surprise => "surprise",
        }
    }

    /// Map a class index of a FER-2013 model to its label.
    pub fn from_fer_index(index: usize) -> Option<Self> {
        Self::FER_ORDER.get(index).copied()
    }
}

/// Distress for an optional label; no face is never distressed.
pub fn is_distressed(label: Option<EmotionLabel>) -> bool {
    label.is_some_and(|label| label.is_distressed())
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown emotion label: {0:?}")]
pub struct UnknownLabel(pub String);

impl FromStr for EmotionLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|label| label.name() == lower)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}
