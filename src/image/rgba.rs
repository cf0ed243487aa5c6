//! Owned 8-bit RGBA buffer in row-major layout.

/// Owned RGBA image. Samples are interleaved per pixel as `[r, g, b, a]`,
/// row-major with no padding between rows, so
/// `samples.len() == width * height * 4`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Interleaved RGBA samples in row-major order
    pub samples: Vec<u8>,
}

impl PixelBuffer {
    /// Construct a zero-initialized buffer of size `width × height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            samples: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Wrap existing samples. The length must match the dimensions.
    pub fn from_samples(width: u32, height: u32, samples: Vec<u8>) -> Self {
        assert!(
            samples.len() == width as usize * height as usize * 4,
            "sample buffer length {} does not match {}x{} RGBA",
            samples.len(),
            width,
            height
        );
        Self {
            width,
            height,
            samples,
        }
    }

    #[inline]
    /// Convert (x, y) to the linear index of the pixel's first sample.
    pub fn idx(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Get the `[r, g, b, a]` samples at (x, y), or `None` out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.idx(x, y);
        Some([
            self.samples[i],
            self.samples[i + 1],
            self.samples[i + 2],
            self.samples[i + 3],
        ])
    }

    #[inline]
    /// Borrow the samples of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * 4;
        let start = y as usize * stride;
        &self.samples[start..start + stride]
    }

    #[inline]
    /// Mutably borrow the samples of row `y`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.width as usize * 4;
        let start = y as usize * stride;
        &mut self.samples[start..start + stride]
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
