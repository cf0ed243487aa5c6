//! Filters derived from the generic engine.

use super::engine::{convolve, convolve_mapped};
use super::kernel::Kernel;
use crate::image::PixelBuffer;

type Kernel3 = [[f32; 3]; 3];

const SHARPEN_KERNEL: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];
const LAPLACIAN_KERNEL: Kernel3 = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];

/// Uniform blur with a synthesized box kernel.
pub fn box_blur(src: &PixelBuffer, size: usize) -> PixelBuffer {
    convolve(src, &Kernel::boxcar(size))
}

/// Gaussian blur with a synthesized, normalized kernel.
pub fn gaussian_blur(src: &PixelBuffer, size: usize, sigma: f32) -> PixelBuffer {
    convolve(src, &Kernel::gaussian(size, sigma))
}

/// Unsharp-style sharpening with the fixed 3×3 kernel
/// `[[0,-1,0],[-1,5,-1],[0,-1,0]]`.
pub fn sharpen(src: &PixelBuffer) -> PixelBuffer {
    convolve(src, &Kernel::from_array3(&SHARPEN_KERNEL))
}

/// Laplacian edge-magnitude map.
///
/// The fixed 3×3 kernel `[[0,1,0],[1,-4,1],[0,1,0]]` is applied and the
/// absolute value of the signed sum is taken before clamping, so the output
/// is an edge magnitude, not a signed second derivative.
pub fn laplacian(src: &PixelBuffer) -> PixelBuffer {
    convolve_mapped(src, &Kernel::from_array3(&LAPLACIAN_KERNEL), |v| v.abs())
}
