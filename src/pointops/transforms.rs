//! LUT-driven intensity transforms: negative, gamma, log, quantize.

use super::lut::Lut;
use crate::image::PixelBuffer;

/// Invert every color sample: `s = 255 - r`. Self-inverse.
pub fn negative(src: &PixelBuffer) -> PixelBuffer {
    Lut::build(|v| 255 - v).apply(src)
}

/// Power-law remapping `s = 255 · clamp(c · (r/255)^gamma)`.
///
/// `gamma < 1` brightens, `gamma > 1` darkens; `gamma = 1, c = 1` is the
/// identity up to rounding. Any positive `gamma`/`c` is accepted; results
/// saturate at the sample bounds instead of failing.
pub fn gamma_correction(src: &PixelBuffer, gamma: f32, c: f32) -> PixelBuffer {
    Lut::build(|v| {
        let x = v as f32 / 255.0;
        let mapped = (c * x.powf(gamma)).clamp(0.0, 1.0);
        (mapped * 255.0).round() as u8
    })
    .apply(src)
}

/// Logarithmic remapping `s = clamp(round(c · (255/ln 256) · ln(1 + r)))`.
///
/// Expands dark values; `r = 0` maps to 0 and large values saturate
/// toward 255.
pub fn log_transform(src: &PixelBuffer, c: f32) -> PixelBuffer {
    let scale = 255.0 / (256.0f32).ln();
    Lut::build(|v| {
        let mapped = c * scale * (1.0 + v as f32).ln();
        mapped.round().clamp(0.0, 255.0) as u8
    })
    .apply(src)
}

/// Reduce the sample domain to at most `levels` distinct values.
///
/// `levels` outside `[2, 256]` is clamped silently. Each sample snaps to
/// the nearest of `levels` evenly spaced values across `[0, 255]`.
pub fn quantize(src: &PixelBuffer, levels: u32) -> PixelBuffer {
    let levels = levels.clamp(2, 256);
    let step = 255.0 / (levels - 1) as f32;
    Lut::build(|v| {
        let snapped = (v as f32 / step).round() * step;
        snapped.round().clamp(0.0, 255.0) as u8
    })
    .apply(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_1px_rows() -> PixelBuffer {
        // 256x1 image whose red/green/blue all ramp 0..=255
        let mut img = PixelBuffer::new(256, 1);
        for x in 0..256u32 {
            let i = img.idx(x, 0);
            let v = x as u8;
            img.samples[i..i + 4].copy_from_slice(&[v, v, v, 255]);
        }
        img
    }

    #[test]
    fn negative_is_an_involution() {
        let img = ramp_1px_rows();
        let twice = negative(&negative(&img));
        assert_eq!(twice.samples, img.samples);
    }

    #[test]
    fn gamma_one_is_identity_within_rounding() {
        let img = ramp_1px_rows();
        let out = gamma_correction(&img, 1.0, 1.0);
        for (a, b) in img.samples.iter().zip(out.samples.iter()) {
            assert!((*a as i16 - *b as i16).abs() <= 1, "{a} vs {b}");
        }
    }

    #[test]
    fn log_transform_maps_zero_to_zero() {
        let img = PixelBuffer::new(1, 1);
        let out = log_transform(&img, 1.0);
        assert_eq!(out.get_pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn quantize_two_levels_is_black_or_white() {
        let img = ramp_1px_rows();
        let out = quantize(&img, 2);
        for px in out.samples.chunks_exact(4) {
            assert!(px[0] == 0 || px[0] == 255, "unexpected level {}", px[0]);
        }
    }

    #[test]
    fn quantize_clamps_out_of_range_levels() {
        let img = ramp_1px_rows();
        // levels=0 clamps to 2
        let out = quantize(&img, 0);
        let mut distinct: Vec<u8> = out.samples.chunks_exact(4).map(|p| p[0]).collect();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() <= 2);
    }
}
