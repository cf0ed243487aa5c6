//! Sobel edge maps on the luminance plane.
//!
//! The two fixed 3×3 kernels are applied to a luminance-converted copy of
//! the image with clamp-to-edge borders. The selected output (`|Gx|`,
//! `|Gy|`, or `sqrt(Gx²+Gy²)`) is clamped to 255 and broadcast to all color
//! channels; alpha is retained from the source.

use crate::image::{luminance, PixelBuffer};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Which Sobel response to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SobelAxis {
    /// `|Gx|`: vertical-edge response
    Horizontal,
    /// `|Gy|`: horizontal-edge response
    Vertical,
    /// `sqrt(Gx² + Gy²)`
    Magnitude,
}

/// Sobel edge map of `src` as a gray RGBA image.
pub fn sobel(src: &PixelBuffer, axis: SobelAxis) -> PixelBuffer {
    let luma = luminance(src);
    let w = luma.w;
    let h = luma.h;
    let mut out = PixelBuffer::new(src.width, src.height);
    if w == 0 || h == 0 {
        return out;
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [luma.row(y_idx[0]), luma.row(y_idx[1]), luma.row(y_idx[2])];
        let src_row = src.row(y as u32);
        let dst_row = out.row_mut(y as u32);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                for (kx, &xx) in x_idx.iter().enumerate() {
                    let sample = row[xx];
                    sum_x += sample * kx_row[kx];
                    sum_y += sample * ky_row[kx];
                }
            }

            let value = match axis {
                SobelAxis::Horizontal => sum_x.abs(),
                SobelAxis::Vertical => sum_y.abs(),
                SobelAxis::Magnitude => (sum_x * sum_x + sum_y * sum_y).sqrt(),
            };
            let gray = value.round().clamp(0.0, 255.0) as u8;
            let dst = &mut dst_row[x * 4..x * 4 + 4];
            dst[0] = gray;
            dst[1] = gray;
            dst[2] = gray;
            dst[3] = src_row[x * 4 + 3];
        }
    }
    out
}
