//! Frequency-domain analysis: 2D FFT and magnitude-spectrum rendering.
//!
//! The pipeline reduces the image to luminance, zero-pads each axis to the
//! next power of two, runs a separable 2D FFT (rows, then columns), shifts
//! quadrants so the zero-frequency term sits at the center, log-scales the
//! magnitudes, and crops the normalized spectrum back to the original
//! dimensions.
//!
//! The FFT core is an iterative in-place radix-2 transform (bit-reversal
//! permutation followed by butterfly passes). Feeding it a non-power-of-two
//! length indicates a defect in the padding step and is treated as fatal.

pub mod fft;
pub mod spectrum;

pub use fft::{fft_2d, fft_in_place, next_pow2};
pub use spectrum::{magnitude_spectrum, magnitude_spectrum_with_stats, SpectrumStats};
