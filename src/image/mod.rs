//! Canonical image buffers shared by every engine.
//!
//! - `PixelBuffer`: owned 8-bit RGBA image, row-major, no row padding.
//! - `LumaF32`: owned single-channel float plane used by operations that
//!   reduce color to luminance (thresholding, Sobel, FFT).
//! - `io`: thin load/save helpers for the demo binaries and tests.
//!
//! Engines take buffers by shared reference and return freshly allocated
//! outputs; nothing here mutates an input in place.

pub mod io;
pub mod luma;
pub mod rgba;

pub use self::luma::{luminance, LumaF32};
pub use self::rgba::PixelBuffer;

/// Perceptual luminance weights for RGB reduction.
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];
