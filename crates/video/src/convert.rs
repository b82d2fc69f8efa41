/// Converts packed YUYV (YUV 4:2:2) to packed RGB8.
///
/// Every 4 input bytes `[Y0, U, Y1, V]` become two RGB pixels sharing the
/// same chroma, using BT.601 full-range coefficients.
///
/// Returns `None` if `data` holds fewer than `width * height * 2` bytes.
pub fn yuyv_to_rgb(data: &[u8], width: u32, height: u32) -> Option<Vec<u8>> {
    let pixels = width as usize * height as usize;
    let len = pixels * 2;
    if data.len() < len {
        return None;
    }

    let mut rgb = Vec::with_capacity(pixels * 3);
    for quad in data[..len].chunks_exact(4) {
        let (u, v) = (quad[1], quad[3]);
        rgb.extend_from_slice(&yuv_pixel(quad[0], u, v));
        rgb.extend_from_slice(&yuv_pixel(quad[2], u, v));
    }
    Some(rgb)
}

fn yuv_pixel(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = y as f32;
    let u = u as f32 - 128.0;
    let v = v as f32 - 128.0;
    let clamp = |c: f32| c.clamp(0.0, 255.0) as u8;
    [
        clamp(y + 1.402 * v),
        clamp(y - 0.344 * u - 0.714 * v),
        clamp(y + 1.772 * u),
    ]
}
