use {
    crate::{CaptureError, convert},
    std::time::Instant,
};

/// Pixel encoding of a [`Frame`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Rgb8,
    Gray8,
    Yuyv,
    Jpeg,
}

impl PixelFormat {
    /// Bytes per pixel, `None` for compressed formats.
    pub fn bytes_per_pixel(&self) -> Option<usize> {
        match self {
            PixelFormat::Rgb8 => Some(3),
            PixelFormat::Gray8 => Some(1),
            PixelFormat::Yuyv => Some(2),
            PixelFormat::Jpeg => None,
        }
    }

    pub fn fourcc(&self) -> [u8; 4] {
        match self {
            PixelFormat::Rgb8 => *b"RGB3",
            PixelFormat::Gray8 => *b"GREY",
            PixelFormat::Yuyv => *b"YUYV",
            PixelFormat::Jpeg => *b"MJPG",
        }
    }

    pub fn from_fourcc(fourcc: &[u8; 4]) -> Option<Self> {
        match fourcc {
            b"RGB3" => Some(PixelFormat::Rgb8),
            b"GREY" => Some(PixelFormat::Gray8),
            b"YUYV" => Some(PixelFormat::Yuyv),
            b"MJPG" => Some(PixelFormat::Jpeg),
            _ => None,
        }
    }
}

/// An immutable captured image.
///
/// Frames are moved from stage to stage, never shared: the buffer is only
/// reachable through `&self` accessors or by consuming the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
    captured_at: Instant,
}

impl Frame {
    /// Wrap a buffer, checking its length for uncompressed formats.
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, CaptureError> {
        if let Some(bpp) = format.bytes_per_pixel() {
            let expected = width as usize * height as usize * bpp;
            if data.len() != expected {
                return Err(CaptureError::InvalidFrame {
                    expected,
                    actual: data.len(),
                });
            }
        }
        Ok(Self {
            width,
            height,
            format,
            data,
            captured_at: Instant::now(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn captured_at(&self) -> Instant {
        self.captured_at
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Decode into a new `Rgb8` frame with the same capture time.
    pub fn to_rgb(&self) -> Result<Frame, CaptureError> {
        let (width, height, data) = match self.format {
            PixelFormat::Rgb8 => (self.width, self.height, self.data.clone()),
            PixelFormat::Gray8 => (
                self.width,
                self.height,
                self.data.iter().flat_map(|&v| [v, v, v]).collect(),
            ),
            PixelFormat::Yuyv => {
                let rgb = convert::yuyv_to_rgb(&self.data, self.width, self.height).ok_or(
                    CaptureError::InvalidFrame {
                        expected: self.width as usize * self.height as usize * 2,
                        actual: self.data.len(),
                    },
                )?;
                (self.width, self.height, rgb)
            }
            PixelFormat::Jpeg => {
                let decoded =
                    image::load_from_memory_with_format(&self.data, image::ImageFormat::Jpeg)?
                        .to_rgb8();
                (decoded.width(), decoded.height(), decoded.into_raw())
            }
        };
        let mut frame = Frame::new(width, height, PixelFormat::Rgb8, data)?;
        frame.captured_at = self.captured_at;
        Ok(frame)
    }
}
