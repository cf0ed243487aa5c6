//! Channel histograms and histogram equalization.

use super::lut::Lut;
use crate::image::{PixelBuffer, LUMA_WEIGHTS};
use serde::Serialize;

/// 256-bin frequency counts for each color channel plus luminance.
///
/// Built by a single scan over the buffer; never persisted by the library
/// (the demo tools may serialize it as a JSON report).
#[derive(Clone, Serialize)]
pub struct Histogram {
    pub r: Vec<u32>,
    pub g: Vec<u32>,
    pub b: Vec<u32>,
    pub luma: Vec<u32>,
}

impl Histogram {
    /// Scan `src` once and count every channel.
    pub fn of(src: &PixelBuffer) -> Self {
        let mut r = vec![0u32; 256];
        let mut g = vec![0u32; 256];
        let mut b = vec![0u32; 256];
        let mut luma = vec![0u32; 256];
        for px in src.samples.chunks_exact(4) {
            r[px[0] as usize] += 1;
            g[px[1] as usize] += 1;
            b[px[2] as usize] += 1;
            let l = LUMA_WEIGHTS[0] * px[0] as f32
                + LUMA_WEIGHTS[1] * px[1] as f32
                + LUMA_WEIGHTS[2] * px[2] as f32;
            luma[(l.round().clamp(0.0, 255.0)) as usize] += 1;
        }
        Histogram { r, g, b, luma }
    }
}

impl std::fmt::Debug for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total: u32 = self.r.iter().sum();
        f.debug_struct("Histogram").field("pixels", &total).finish()
    }
}

/// Equalize each color channel independently through its cumulative
/// distribution.
///
/// For every channel: count a 256-bin histogram over the whole image, take
/// the running sum, normalize by the pixel count, scale by 255, and remap
/// through the resulting table. A uniform image collapses to a single
/// output value because its CDF is one step.
pub fn equalize_histogram(src: &PixelBuffer) -> PixelBuffer {
    let hist = Histogram::of(src);
    let total = src.pixel_count() as f32;
    if total == 0.0 {
        return src.clone();
    }
    let lut_r = cdf_lut(&hist.r, total);
    let lut_g = cdf_lut(&hist.g, total);
    let lut_b = cdf_lut(&hist.b, total);
    lut_r.apply_per_channel(src, &lut_g, &lut_b)
}

fn cdf_lut(bins: &[u32], total: f32) -> Lut {
    let mut cdf = [0u32; 256];
    let mut running = 0u32;
    for (i, &count) in bins.iter().enumerate() {
        running += count;
        cdf[i] = running;
    }
    Lut::build(|v| {
        let mapped = cdf[v as usize] as f32 / total * 255.0;
        mapped.round().clamp(0.0, 255.0) as u8
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_every_pixel_once() {
        let img = PixelBuffer::new(7, 5);
        let hist = Histogram::of(&img);
        assert_eq!(hist.r[0], 35);
        assert_eq!(hist.luma[0], 35);
        assert_eq!(hist.g.iter().sum::<u32>(), 35);
    }

    #[test]
    fn uniform_image_equalizes_to_one_value() {
        let mut img = PixelBuffer::new(4, 4);
        for px in img.samples.chunks_exact_mut(4) {
            px.copy_from_slice(&[90, 90, 90, 255]);
        }
        let out = equalize_histogram(&img);
        let first = out.get_pixel(0, 0).unwrap();
        for px in out.samples.chunks_exact(4) {
            assert_eq!(px[0], first[0]);
            assert_eq!(px[1], first[0]);
            assert_eq!(px[2], first[0]);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn equalization_spreads_a_two_level_image() {
        // half dark, half bright: equalization must keep two distinct levels
        let mut img = PixelBuffer::new(2, 1);
        let i = img.idx(0, 0);
        img.samples[i..i + 4].copy_from_slice(&[10, 10, 10, 255]);
        let i = img.idx(1, 0);
        img.samples[i..i + 4].copy_from_slice(&[20, 20, 20, 255]);
        let out = equalize_histogram(&img);
        let a = out.get_pixel(0, 0).unwrap()[0];
        let b = out.get_pixel(1, 0).unwrap()[0];
        assert_ne!(a, b);
        assert_eq!(b, 255); // top of the CDF always maps to 255
    }
}
