use {
    crate::LoopState,
    content::{ContentError, PlaylistError},
    thiserror::Error,
    video::CaptureError,
};

/// Failure driving the acquisition loop.
#[derive(Debug, Error)]
pub enum LoopError {
    #[error("cannot go from {from:?} to {to:?}")]
    InvalidTransition { from: LoopState, to: LoopState },

    #[error("acquisition loop terminated")]
    Terminated,

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("failed to build worker runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("acquisition worker exited before reporting")]
    WorkerLost,
}

/// Failure of a dispatcher action.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Reactive actions are only available while distressed.
    #[error("{action} is disabled")]
    Disabled { action: &'static str },

    #[error(transparent)]
    Playlist(#[from] PlaylistError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Loop(#[from] LoopError),
}
