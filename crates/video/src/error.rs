use thiserror::Error;

/// Failure while opening, reading or releasing a capture device.
///
/// Read failures come in two kinds: transient ones (the device is busy or
/// no frame was ready) are retried on the next tick, everything else is
/// fatal to the loop that owns the device. See [`CaptureError::is_transient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("failed to open capture device {index}: {reason}")]
    Open { index: u32, reason: String },

    #[error("capture device not open")]
    NotOpen,

    #[error("capture device busy: {0}")]
    Busy(String),

    #[error("timed out waiting for a frame")]
    Timeout,

    #[error("invalid frame: expected {expected} bytes, got {actual}")]
    InvalidFrame { expected: usize, actual: usize },

    #[error("frame decode failed: {0}")]
    Decode(String),

    #[error("capture device disconnected: {0}")]
    Disconnected(String),

    #[error("capture stream failed: {0}")]
    Stream(String),
}

impl CaptureError {
    /// Whether the next read may succeed without reopening the device.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CaptureError::Busy(_)
                | CaptureError::Timeout
                | CaptureError::InvalidFrame { .. }
                | CaptureError::Decode(_)
        )
    }

    pub fn is_fatal(&self) -> bool {
        !self.is_transient()
    }
}

// ENODEV, what V4L2 reports once a USB camera is unplugged
const ENODEV: i32 = 19;

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::WouldBlock | ErrorKind::Interrupted => CaptureError::Busy(err.to_string()),
            ErrorKind::TimedOut => CaptureError::Timeout,
            ErrorKind::NotFound => CaptureError::Disconnected(err.to_string()),
            _ if err.raw_os_error() == Some(ENODEV) => CaptureError::Disconnected(err.to_string()),
            _ => CaptureError::Stream(err.to_string()),
        }
    }
}

impl From<image::ImageError> for CaptureError {
    fn from(err: image::ImageError) -> Self {
        CaptureError::Decode(err.to_string())
    }
}
