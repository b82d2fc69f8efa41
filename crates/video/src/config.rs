use crate::PixelFormat;

/// Capture device settings.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureConfig {
    index: u32,
    width: u32,
    height: u32,
    fps: u32,
    format: PixelFormat,
    buffer_count: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            index: 0,
            width: 640,
            height: 480,
            fps: 30,
            format: PixelFormat::Yuyv,
            buffer_count: 4,
        }
    }
}

impl CaptureConfig {
    /// Select the platform video device by index (`/dev/video<index>` on Linux).
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Requested pixel format. Devices may negotiate something else.
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn device_path(&self) -> String {
        format!("/dev/video{}", self.index)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }
}
