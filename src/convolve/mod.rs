//! Weighted-neighborhood filtering over RGBA buffers.
//!
//! The engine computes a correlation: the kernel is applied as given,
//! without the 180° flip of textbook convolution. Per output pixel and per
//! color channel it accumulates `Σ kernel[i][j] · sample(x+j-c, y+i-c)` in
//! f32, then rounds and clamps to `[0, 255]`. Alpha is copied unmodified
//! from the source pixel.
//!
//! Border policy is clamp-to-edge: out-of-bounds neighbor coordinates are
//! replaced by the nearest valid coordinate. This applies uniformly to all
//! convolution-based filters (the morphology engine intentionally uses a
//! different policy).
//!
//! With the `parallel` feature enabled, output rows are filled across the
//! rayon pool; each worker writes a disjoint row and reads only the shared
//! input, so results are identical to the sequential path.

pub mod engine;
pub mod filters;
pub mod kernel;
pub mod sobel;

pub use engine::convolve;
pub use filters::{box_blur, gaussian_blur, laplacian, sharpen};
pub use kernel::Kernel;
pub use sobel::{sobel, SobelAxis};
