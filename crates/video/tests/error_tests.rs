use {std::io, video::CaptureError};

#[test]
fn test_io_errors_split_into_transient_and_fatal() {
    let busy: CaptureError = io::Error::new(io::ErrorKind::WouldBlock, "no buffer").into();
    assert!(matches!(busy, CaptureError::Busy(_)));
    assert!(busy.is_transient());

    let timeout: CaptureError = io::Error::new(io::ErrorKind::TimedOut, "select").into();
    assert_eq!(timeout, CaptureError::Timeout);
    assert!(timeout.is_transient());

    let gone: CaptureError = io::Error::from_raw_os_error(19).into();
    assert!(matches!(gone, CaptureError::Disconnected(_)));
    assert!(gone.is_fatal());

    let missing: CaptureError = io::Error::new(io::ErrorKind::NotFound, "no /dev/video9").into();
    assert!(matches!(missing, CaptureError::Disconnected(_)));

    let other: CaptureError = io::Error::new(io::ErrorKind::InvalidInput, "bad ioctl").into();
    assert!(matches!(other, CaptureError::Stream(_)));
    assert!(other.is_fatal());
}

#[test]
fn test_open_and_not_open_are_fatal() {
    let open = CaptureError::Open {
        index: 0,
        reason: "permission denied".to_string(),
    };
    assert!(open.is_fatal());
    assert!(open.to_string().contains("device 0"));
    assert!(CaptureError::NotOpen.is_fatal());
}
