#[cfg(feature = "v4l2")]
mod v4l2_tests {
    use video::{CaptureConfig, CaptureError, FrameSource, V4l2Source};

    #[test]
    fn test_missing_device_fails_to_open() {
        let mut source = V4l2Source::new(CaptureConfig::default().with_index(250));
        match source.open() {
            Err(CaptureError::Open { index, .. }) => assert_eq!(index, 250),
            other => panic!("expected CaptureError::Open, got {:?}", other),
        }
        assert!(!source.is_open());
    }

    #[test]
    fn test_release_without_open() {
        let mut source = V4l2Source::new(CaptureConfig::default().with_index(250));
        source.release();
        source.release();
        assert_eq!(source.read().unwrap_err(), CaptureError::NotOpen);
    }
}
