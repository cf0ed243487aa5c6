use raster_lab::PixelBuffer;

/// Opaque image with every color sample set to `value`.
pub fn uniform_rgba(width: u32, height: u32, value: u8) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height);
    for px in img.samples.chunks_exact_mut(4) {
        px.copy_from_slice(&[value, value, value, 255]);
    }
    img
}

/// Horizontal gray ramp: `value = floor(x / width * 255)`.
pub fn horizontal_ramp_rgba(width: u32, height: u32) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = (x as f32 / width as f32 * 255.0).floor() as u8;
            let i = img.idx(x, y);
            img.samples[i..i + 4].copy_from_slice(&[v, v, v, 255]);
        }
    }
    img
}

/// Vertically split image: left half black, right half white.
pub fn vertical_split_rgba(width: u32, height: u32) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { 0 } else { 255 };
            let i = img.idx(x, y);
            img.samples[i..i + 4].copy_from_slice(&[v, v, v, 255]);
        }
    }
    img
}

/// High-contrast checkerboard.
pub fn checkerboard_rgba(width: u32, height: u32, cell: u32) -> PixelBuffer {
    assert!(cell > 0, "cell size must be positive");
    let mut img = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = if ((x / cell) + (y / cell)) % 2 == 0 {
                32
            } else {
                220
            };
            let i = img.idx(x, y);
            img.samples[i..i + 4].copy_from_slice(&[v, v, v, 255]);
        }
    }
    img
}
