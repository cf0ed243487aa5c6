//! Generic clamp-to-edge correlation engine.

use super::kernel::Kernel;
use crate::image::PixelBuffer;

/// Apply `kernel` to every color channel of `src`.
///
/// Accumulation happens in f32 per channel; the signed sum is rounded and
/// clamped to `[0, 255]`. Alpha is copied from the source pixel.
pub fn convolve(src: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    convolve_mapped(src, kernel, |v| v)
}

/// Like [`convolve`], but passes the signed channel sum through `map`
/// before rounding. The Laplacian magnitude filter maps through `abs`.
pub(crate) fn convolve_mapped<F>(src: &PixelBuffer, kernel: &Kernel, map: F) -> PixelBuffer
where
    F: Fn(f32) -> f32 + Sync,
{
    let stride = src.width as usize * 4;
    if stride == 0 || src.height == 0 {
        return src.clone();
    }
    let mut samples = vec![0u8; stride * src.height as usize];
    process_rows(src, kernel, &map, &mut samples, stride);
    PixelBuffer::from_samples(src.width, src.height, samples)
}

#[cfg(not(feature = "parallel"))]
fn process_rows<F>(src: &PixelBuffer, kernel: &Kernel, map: &F, samples: &mut [u8], stride: usize)
where
    F: Fn(f32) -> f32 + Sync,
{
    for (y, dst_row) in samples.chunks_mut(stride).enumerate() {
        fill_row(src, kernel, map, y, dst_row);
    }
}

#[cfg(feature = "parallel")]
fn process_rows<F>(src: &PixelBuffer, kernel: &Kernel, map: &F, samples: &mut [u8], stride: usize)
where
    F: Fn(f32) -> f32 + Sync,
{
    use rayon::prelude::*;

    samples
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, dst_row)| fill_row(src, kernel, map, y, dst_row));
}

fn fill_row<F>(src: &PixelBuffer, kernel: &Kernel, map: &F, y: usize, dst_row: &mut [u8])
where
    F: Fn(f32) -> f32,
{
    let w = src.width as usize;
    let h = src.height as usize;
    let size = kernel.size();
    let center = kernel.center() as isize;
    let src_row = src.row(y as u32);

    for x in 0..w {
        let mut acc = [0.0f32; 3];
        for i in 0..size {
            let sy = (y as isize + i as isize - center).clamp(0, h as isize - 1) as u32;
            let neigh_row = src.row(sy);
            for j in 0..size {
                let sx = (x as isize + j as isize - center).clamp(0, w as isize - 1) as usize;
                let weight = kernel.weight(i, j);
                let px = &neigh_row[sx * 4..sx * 4 + 3];
                acc[0] += weight * px[0] as f32;
                acc[1] += weight * px[1] as f32;
                acc[2] += weight * px[2] as f32;
            }
        }
        let dst = &mut dst_row[x * 4..x * 4 + 4];
        dst[0] = map(acc[0]).round().clamp(0.0, 255.0) as u8;
        dst[1] = map(acc[1]).round().clamp(0.0, 255.0) as u8;
        dst[2] = map(acc[2]).round().clamp(0.0, 255.0) as u8;
        dst[3] = src_row[x * 4 + 3];
    }
}
