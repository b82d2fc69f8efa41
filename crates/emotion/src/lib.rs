//! Emotion labels, the classifier seam, and the distress state machine.

pub mod classifier;
pub mod error;
pub mod label;
pub mod state;

pub use classifier::{
    ClassificationResult, Classifier, FnClassifier, classify_or_unlabeled, from_fn,
};
pub use error::ClassificationError;
pub use label::{EmotionLabel, UnknownLabel, is_distressed};
pub use state::{DistressChange, EmotionState, EmotionStateMachine, transition};
