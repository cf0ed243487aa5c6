//! Sandboxed per-pixel formula evaluation and ad-hoc kernel application.
//!
//! A formula is an infix arithmetic expression over the fixed grammar
//! `+ - * / % ^ ( )` with variables `r g b x y w h`, the function whitelist
//! `sin cos tan sqrt abs floor ceil round min max log`, and the constants
//! `PI` and `E`. The string is parsed once into an expression tree and the
//! tree is interpreted per pixel; no code is ever synthesized from user
//! input.
//!
//! Parse errors are surfaced from [`Formula::parse`] so callers can reject
//! typos up front. Per-pixel evaluation is best-effort: a non-finite result
//! falls back to the unmodified channel value instead of propagating an
//! error.
//!
//! `r` holds the channel value currently under evaluation (red, green and
//! blue are substituted into it in turn); `g` and `b` always hold the
//! pixel's green and blue samples; `x y w h` are pixel coordinates and
//! image dimensions.

mod parser;
mod token;

pub mod eval;

pub use eval::{apply_kernel, Formula};
