use {
    crate::{CaptureConfig, CaptureError, Frame, FrameSource, PixelFormat},
    std::time::Duration,
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

// upper bound on a single blocking read, so a stalled device reports Timeout
const READ_TIMEOUT: Duration = Duration::from_millis(500);

/// Video4Linux2 capture device, addressed by index.
pub struct V4l2Source {
    config: CaptureConfig,
    stream: Option<MmapStream<'static>>,
    width: u32,
    height: u32,
    format: PixelFormat,
}

impl std::fmt::Debug for V4l2Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Source")
            .field("config", &self.config)
            .field("open", &self.stream.is_some())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .finish()
    }
}

impl V4l2Source {
    /// Create a closed source. Nothing touches the device until `open`.
    pub fn new(config: CaptureConfig) -> Self {
        let format = config.format();
        Self {
            config,
            stream: None,
            width: 0,
            height: 0,
            format,
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Negotiated size, valid once open.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Negotiated pixel format, valid once open.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    fn open_error(&self, err: std::io::Error) -> CaptureError {
        CaptureError::Open {
            index: self.config.index(),
            reason: err.to_string(),
        }
    }
}

impl FrameSource for V4l2Source {
    fn open(&mut self) -> Result<(), CaptureError> {
        self.release();

        let device = Device::new(self.config.index() as usize).map_err(|e| self.open_error(e))?;

        let requested = Format::new(
            self.config.width(),
            self.config.height(),
            FourCC::new(&self.config.format().fourcc()),
        );
        let actual = Capture::set_format(&device, &requested).map_err(|e| self.open_error(e))?;
        let format = PixelFormat::from_fourcc(&actual.fourcc.repr)
            .filter(|f| matches!(f, PixelFormat::Yuyv | PixelFormat::Jpeg))
            .ok_or_else(|| CaptureError::Open {
                index: self.config.index(),
                reason: format!("unsupported pixel format {}", actual.fourcc),
            })?;

        let params = v4l::video::capture::Parameters::with_fps(self.config.fps());
        if let Err(e) = Capture::set_params(&device, &params) {
            // not every driver lets us pick the rate
            log::warn!(
                "{}: could not set {} fps: {}",
                self.config.device_path(),
                self.config.fps(),
                e
            );
        }

        let mut stream =
            MmapStream::with_buffers(&device, Type::VideoCapture, self.config.buffer_count())
                .map_err(|e| self.open_error(e))?;
        stream.set_timeout(READ_TIMEOUT);

        self.width = actual.width;
        self.height = actual.height;
        self.format = format;
        self.stream = Some(stream);
        log::info!(
            "{} open: {}x{} {:?}",
            self.config.device_path(),
            self.width,
            self.height,
            self.format
        );
        Ok(())
    }

    fn read(&mut self) -> Result<Frame, CaptureError> {
        let stream = self.stream.as_mut().ok_or(CaptureError::NotOpen)?;
        let (data, metadata) = CaptureStream::next(stream)?;
        let data = match self.format {
            // compressed buffers are padded, only `bytesused` is payload
            PixelFormat::Jpeg => data[..(metadata.bytesused as usize).min(data.len())].to_vec(),
            _ => data.to_vec(),
        };
        Frame::new(self.width, self.height, self.format, data)
    }

    fn release(&mut self) {
        if self.stream.take().is_some() {
            log::info!("{} released", self.config.device_path());
        }
    }

    fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}

impl Drop for V4l2Source {
    fn drop(&mut self) {
        self.release();
    }
}
