use {thiserror::Error, video::CaptureError};

/// A classifier could not produce a result for a frame.
///
/// Never fatal: the acquisition loop treats it as "no label".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("model error: {0}")]
    Model(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("frame not usable: {0}")]
    Frame(#[from] CaptureError),
}
