//! Per-sample intensity remapping.
//!
//! Every operation here touches each color sample independently of its
//! neighbors; alpha passes through untouched. Remappings are driven by a
//! 256-entry lookup table built once per invocation, so the per-sample
//! formula runs 256 times instead of once per sample.
//!
//! Out-of-range parameters are normalized silently (quantization levels
//! clamp to `[2, 256]`); gamma and scale constants are taken as-is and
//! saturate at the `[0, 255]` sample bounds rather than fail.

pub mod histogram;
pub mod lut;
pub mod transforms;

pub use histogram::{equalize_histogram, Histogram};
pub use lut::Lut;
pub use transforms::{gamma_correction, log_transform, negative, quantize};
