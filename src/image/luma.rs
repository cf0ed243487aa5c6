//! Owned single-channel f32 plane in row-major layout.
//!
//! Values are kept on the 8-bit sample scale `[0, 255]` so thresholds and
//! clamping stay directly comparable to `PixelBuffer` samples.

use super::rgba::PixelBuffer;
use super::LUMA_WEIGHTS;

#[derive(Clone, Debug)]
pub struct LumaF32 {
    /// Plane width in pixels
    pub w: usize,
    /// Plane height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl LumaF32 {
    /// Construct a zero-initialized plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}

/// Reduce an RGBA buffer to a luminance plane using the perceptual weights
/// `0.299 R + 0.587 G + 0.114 B`. Alpha does not participate.
pub fn luminance(src: &PixelBuffer) -> LumaF32 {
    let w = src.width as usize;
    let h = src.height as usize;
    let mut out = LumaF32::new(w, h);
    for y in 0..h {
        let src_row = src.row(y as u32);
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let px = &src_row[x * 4..x * 4 + 3];
            *dst_px = LUMA_WEIGHTS[0] * px[0] as f32
                + LUMA_WEIGHTS[1] * px[1] as f32
                + LUMA_WEIGHTS[2] * px[2] as f32;
        }
    }
    out
}
