//! Frame capture for the mood workspace.
//!
//! A [`FrameSource`] owns a capture device and hands out immutable
//! [`Frame`]s one at a time. Backends live behind cargo features.

pub mod config;
pub mod convert;
pub mod error;
pub mod source;
pub mod videoframe;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CaptureConfig;
pub use error::CaptureError;
pub use source::FrameSource;
pub use videoframe::{Frame, PixelFormat};

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Source;
