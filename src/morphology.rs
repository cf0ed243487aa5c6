//! Binary morphology over a 3×3 structuring element.
//!
//! These operators expect an already-thresholded image (every color sample
//! 0 or 255), produced by [`threshold`]. Unlike the convolution engine,
//! out-of-bounds footprint cells read as background `0`: erosion therefore
//! forces the output to 0 wherever the footprint touches the border, and
//! border cells never raise a dilation maximum.

use crate::image::{luminance, PixelBuffer};

/// Square binary mask deciding which 3×3 neighbors participate in the
/// min/max aggregation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructElement(pub [[bool; 3]; 3]);

impl StructElement {
    /// Fully set 8-connected element; the one the derived filters use.
    pub const FULL_8: StructElement = StructElement([[true; 3]; 3]);

    /// 4-connected cross. Defined for completeness; no built-in filter
    /// wires it up.
    pub const CROSS_4: StructElement = StructElement([
        [false, true, false],
        [true, true, true],
        [false, true, false],
    ]);

    #[inline]
    fn contains(&self, dy: usize, dx: usize) -> bool {
        self.0[dy][dx]
    }
}

impl Default for StructElement {
    fn default() -> Self {
        Self::FULL_8
    }
}

/// Binarize on luminance: samples with `0.299R+0.587G+0.114B >= t` become
/// 255 on all color channels, the rest 0. Alpha is preserved.
pub fn threshold(src: &PixelBuffer, t: f32) -> PixelBuffer {
    let luma = luminance(src);
    let mut out = PixelBuffer::new(src.width, src.height);
    for y in 0..src.height {
        let src_row = src.row(y);
        let luma_row = luma.row(y as usize);
        let dst_row = out.row_mut(y);
        for (x, &l) in luma_row.iter().enumerate() {
            let v = if l >= t { 255 } else { 0 };
            let dst = &mut dst_row[x * 4..x * 4 + 4];
            dst[0] = v;
            dst[1] = v;
            dst[2] = v;
            dst[3] = src_row[x * 4 + 3];
        }
    }
    out
}

/// Minimum over the structuring-element footprint; shrinks foreground.
pub fn erode(src: &PixelBuffer, element: &StructElement) -> PixelBuffer {
    aggregate(src, element, Mode::Min)
}

/// Maximum over the structuring-element footprint; expands foreground.
pub fn dilate(src: &PixelBuffer, element: &StructElement) -> PixelBuffer {
    aggregate(src, element, Mode::Max)
}

/// `dilate(erode(x))`: removes isolated foreground, idempotent on the
/// result.
pub fn open(src: &PixelBuffer, element: &StructElement) -> PixelBuffer {
    dilate(&erode(src, element), element)
}

/// `erode(dilate(x))`: fills isolated background holes.
pub fn close(src: &PixelBuffer, element: &StructElement) -> PixelBuffer {
    erode(&dilate(src, element), element)
}

#[derive(Clone, Copy)]
enum Mode {
    Min,
    Max,
}

fn aggregate(src: &PixelBuffer, element: &StructElement, mode: Mode) -> PixelBuffer {
    let w = src.width as i64;
    let h = src.height as i64;
    let mut out = PixelBuffer::new(src.width, src.height);
    for y in 0..src.height {
        let src_row = src.row(y);
        let dst_row = out.row_mut(y);
        for x in 0..src.width as usize {
            let mut agg: [u8; 3] = match mode {
                Mode::Min => [255; 3],
                Mode::Max => [0; 3],
            };
            for dy in 0..3usize {
                for dx in 0..3usize {
                    if !element.contains(dy, dx) {
                        continue;
                    }
                    let sy = y as i64 + dy as i64 - 1;
                    let sx = x as i64 + dx as i64 - 1;
                    // outside the image reads as background 0
                    let sample: [u8; 3] = if sx < 0 || sy < 0 || sx >= w || sy >= h {
                        [0; 3]
                    } else {
                        let i = src.idx(sx as u32, sy as u32);
                        [src.samples[i], src.samples[i + 1], src.samples[i + 2]]
                    };
                    for ch in 0..3 {
                        agg[ch] = match mode {
                            Mode::Min => agg[ch].min(sample[ch]),
                            Mode::Max => agg[ch].max(sample[ch]),
                        };
                    }
                }
            }
            let dst = &mut dst_row[x * 4..x * 4 + 4];
            dst[0] = agg[0];
            dst[1] = agg[1];
            dst[2] = agg[2];
            dst[3] = src_row[x * 4 + 3];
        }
    }
    out
}
