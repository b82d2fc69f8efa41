use {
    image::ImageEncoder,
    video::{CaptureError, Frame, PixelFormat},
};

#[test]
fn test_frame_rejects_wrong_length() {
    let err = Frame::new(2, 2, PixelFormat::Rgb8, vec![0; 11]).unwrap_err();
    assert_eq!(
        err,
        CaptureError::InvalidFrame {
            expected: 12,
            actual: 11
        }
    );
    assert!(err.is_transient());
}

#[test]
fn test_frame_accepts_any_jpeg_length() {
    let frame = Frame::new(640, 480, PixelFormat::Jpeg, vec![0xFF, 0xD8]).unwrap();
    assert_eq!(frame.data().len(), 2);
}

#[test]
fn test_gray_to_rgb() {
    let frame = Frame::new(2, 1, PixelFormat::Gray8, vec![10, 200]).unwrap();
    let rgb = frame.to_rgb().unwrap();
    assert_eq!(rgb.format(), PixelFormat::Rgb8);
    assert_eq!(rgb.data(), &[10, 10, 10, 200, 200, 200]);
    assert_eq!(rgb.captured_at(), frame.captured_at());
}

#[test]
fn test_yuyv_to_rgb_frame() {
    let frame = Frame::new(2, 1, PixelFormat::Yuyv, vec![255, 128, 0, 128]).unwrap();
    let rgb = frame.to_rgb().unwrap();
    assert_eq!((rgb.width(), rgb.height()), (2, 1));
    assert_eq!(rgb.into_data(), vec![255, 255, 255, 0, 0, 0]);
}

#[test]
fn test_jpeg_to_rgb_frame() {
    let img = image::RgbImage::from_fn(16, 8, |x, y| image::Rgb([x as u8 * 8, y as u8 * 16, 64]));
    let mut jpeg = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut jpeg)
        .write_image(img.as_raw(), 16, 8, image::ExtendedColorType::Rgb8)
        .unwrap();

    let frame = Frame::new(0, 0, PixelFormat::Jpeg, jpeg).unwrap();
    let rgb = frame.to_rgb().unwrap();
    assert_eq!((rgb.width(), rgb.height()), (16, 8));
    assert_eq!(rgb.data().len(), 16 * 8 * 3);
}

#[test]
fn test_corrupt_jpeg_is_transient() {
    let frame = Frame::new(0, 0, PixelFormat::Jpeg, vec![1, 2, 3]).unwrap();
    let err = frame.to_rgb().unwrap_err();
    assert!(matches!(err, CaptureError::Decode(_)));
    assert!(err.is_transient());
}

#[test]
fn test_fourcc_round_trip() {
    for format in [PixelFormat::Rgb8, PixelFormat::Gray8, PixelFormat::Yuyv, PixelFormat::Jpeg] {
        assert_eq!(PixelFormat::from_fourcc(&format.fourcc()), Some(format));
    }
    assert_eq!(PixelFormat::from_fourcc(b"pRAA"), None);
}
