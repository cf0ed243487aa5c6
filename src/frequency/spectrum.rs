//! Log-magnitude spectrum rendering.

use super::fft::{fft_2d, next_pow2};
use crate::image::{luminance, PixelBuffer};
use log::debug;
use nalgebra::{Complex, DMatrix};
use serde::Serialize;

/// Summary of a spectrum computation, for tooling reports.
#[derive(Clone, Debug, Serialize)]
pub struct SpectrumStats {
    /// Width after zero-padding to a power of two
    pub padded_width: usize,
    /// Height after zero-padding to a power of two
    pub padded_height: usize,
    /// Maximum `ln(1 + magnitude)` before normalization
    pub max_log_magnitude: f32,
}

/// Render the centered log-magnitude spectrum of `src` as a gray RGBA
/// image of the same size, fully opaque.
pub fn magnitude_spectrum(src: &PixelBuffer) -> PixelBuffer {
    magnitude_spectrum_with_stats(src).0
}

/// [`magnitude_spectrum`] plus the padding/normalization stats.
pub fn magnitude_spectrum_with_stats(src: &PixelBuffer) -> (PixelBuffer, SpectrumStats) {
    let w = src.width as usize;
    let h = src.height as usize;
    if w == 0 || h == 0 {
        let stats = SpectrumStats {
            padded_width: 0,
            padded_height: 0,
            max_log_magnitude: 0.0,
        };
        return (src.clone(), stats);
    }

    let luma = luminance(src);
    let pw = next_pow2(w);
    let ph = next_pow2(h);
    debug!("spectrum: {w}x{h} input padded to {pw}x{ph}");

    // zero-pad into the complex plane
    let mut plane = DMatrix::from_fn(ph, pw, |r, c| {
        if r < h && c < w {
            Complex::new(luma.get(c, r), 0.0)
        } else {
            Complex::new(0.0, 0.0)
        }
    });
    fft_2d(&mut plane);

    // shift quadrants so the zero-frequency term lands at the center,
    // then log-scale magnitudes while tracking the maximum
    let mut log_mag = vec![0.0f32; ph * pw];
    let mut max_log = 0.0f32;
    for r in 0..ph {
        for c in 0..pw {
            let src_r = (r + ph / 2) % ph;
            let src_c = (c + pw / 2) % pw;
            let v = (1.0 + plane[(src_r, src_c)].norm()).ln();
            log_mag[r * pw + c] = v;
            if v > max_log {
                max_log = v;
            }
        }
    }
    debug!("spectrum: max log-magnitude {max_log:.4}");

    // crop the normalized spectrum back to the source size, centered
    let x0 = (pw - w) / 2;
    let y0 = (ph - h) / 2;
    let scale = if max_log > 0.0 { 255.0 / max_log } else { 0.0 };
    let mut out = PixelBuffer::new(src.width, src.height);
    for y in 0..h {
        let dst_row = out.row_mut(y as u32);
        for x in 0..w {
            let v = log_mag[(y0 + y) * pw + (x0 + x)] * scale;
            let gray = v.round().clamp(0.0, 255.0) as u8;
            let dst = &mut dst_row[x * 4..x * 4 + 4];
            dst[0] = gray;
            dst[1] = gray;
            dst[2] = gray;
            dst[3] = 255;
        }
    }

    let stats = SpectrumStats {
        padded_width: pw,
        padded_height: ph,
        max_log_magnitude: max_log,
    };
    (out, stats)
}
