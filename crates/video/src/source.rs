use crate::{CaptureError, Frame};

/// A capture device that produces frames on demand.
///
/// The source keeps its device handle internally. Whoever owns the source
/// owns the device: the acquisition loop moves it onto its worker thread
/// and nothing else touches it afterwards.
///
/// `read` blocks until a frame is available or fails. Implementations must
/// report "no frame yet" as a transient [`CaptureError`] and lost devices as
/// fatal ones, so the caller can choose between retrying and giving up.
pub trait FrameSource: Send {
    /// Acquire the device. Opening an open source reopens it.
    fn open(&mut self) -> Result<(), CaptureError>;

    /// Block for the next frame.
    fn read(&mut self) -> Result<Frame, CaptureError>;

    /// Give the device back. Idempotent, and fine to call on a source
    /// whose `open` never succeeded.
    fn release(&mut self);

    fn is_open(&self) -> bool;
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn open(&mut self) -> Result<(), CaptureError> {
        (**self).open()
    }

    fn read(&mut self) -> Result<Frame, CaptureError> {
        (**self).read()
    }

    fn release(&mut self) {
        (**self).release()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}
