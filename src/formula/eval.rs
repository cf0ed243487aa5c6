//! Per-pixel interpretation of parsed formulas.

use super::parser::{parse, BinOp, Expr, Func, Var};
use crate::convolve::{convolve, Kernel};
use crate::image::PixelBuffer;
use log::debug;

/// A validated formula, ready to apply to any number of buffers.
#[derive(Clone, Debug)]
pub struct Formula {
    expr: Expr,
    source: String,
}

impl Formula {
    /// Parse and validate `source`. Syntax errors, unknown identifiers and
    /// arity mismatches are reported here, before any pixel is touched.
    pub fn parse(source: &str) -> Result<Self, String> {
        let expr = parse(source)?;
        Ok(Formula {
            expr,
            source: source.to_string(),
        })
    }

    /// The original expression text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate the formula for every color channel of every pixel.
    ///
    /// Per pixel the expression runs three times with the channel under
    /// evaluation substituted into `r`; `g` and `b` always hold the
    /// pixel's green and blue samples. Results are rounded and clamped to
    /// `[0, 255]`. A non-finite result falls back to the unmodified
    /// channel value; evaluation never fails. Alpha passes through.
    pub fn apply(&self, src: &PixelBuffer) -> PixelBuffer {
        debug!(
            "formula: applying '{}' to {}x{}",
            self.source, src.width, src.height
        );
        let stride = src.width as usize * 4;
        if stride == 0 || src.height == 0 {
            return src.clone();
        }
        let mut samples = vec![0u8; stride * src.height as usize];
        self.process_rows(src, &mut samples, stride);
        PixelBuffer::from_samples(src.width, src.height, samples)
    }

    #[cfg(not(feature = "parallel"))]
    fn process_rows(&self, src: &PixelBuffer, samples: &mut [u8], stride: usize) {
        for (y, dst_row) in samples.chunks_mut(stride).enumerate() {
            self.fill_row(src, y, dst_row);
        }
    }

    #[cfg(feature = "parallel")]
    fn process_rows(&self, src: &PixelBuffer, samples: &mut [u8], stride: usize) {
        use rayon::prelude::*;

        samples
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, dst_row)| self.fill_row(src, y, dst_row));
    }

    fn fill_row(&self, src: &PixelBuffer, y: usize, dst_row: &mut [u8]) {
        let src_row = src.row(y as u32);
        let mut scope = Scope {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            x: 0.0,
            y: y as f32,
            w: src.width as f32,
            h: src.height as f32,
        };
        for (x, (src_px, dst_px)) in src_row
            .chunks_exact(4)
            .zip(dst_row.chunks_exact_mut(4))
            .enumerate()
        {
            scope.x = x as f32;
            scope.g = src_px[1] as f32;
            scope.b = src_px[2] as f32;
            for ch in 0..3 {
                scope.r = src_px[ch] as f32;
                let value = eval(&self.expr, &scope);
                dst_px[ch] = if value.is_finite() {
                    value.round().clamp(0.0, 255.0) as u8
                } else {
                    // best-effort policy: keep the original channel value
                    src_px[ch]
                };
            }
            dst_px[3] = src_px[3];
        }
    }
}

/// Apply a caller-supplied kernel; plain delegation to the convolution
/// engine with no extra semantics.
pub fn apply_kernel(src: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    convolve(src, kernel)
}

struct Scope {
    r: f32,
    g: f32,
    b: f32,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

fn eval(expr: &Expr, scope: &Scope) -> f32 {
    match expr {
        Expr::Num(v) => *v,
        Expr::Var(var) => match var {
            Var::R => scope.r,
            Var::G => scope.g,
            Var::B => scope.b,
            Var::X => scope.x,
            Var::Y => scope.y,
            Var::W => scope.w,
            Var::H => scope.h,
        },
        Expr::Neg(inner) => -eval(inner, scope),
        Expr::Bin(op, lhs, rhs) => {
            let a = eval(lhs, scope);
            let b = eval(rhs, scope);
            match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
                BinOp::Div => a / b,
                BinOp::Rem => a % b,
                BinOp::Pow => a.powf(b),
            }
        }
        Expr::Call(func, args) => {
            let a = eval(&args[0], scope);
            match func {
                Func::Sin => a.sin(),
                Func::Cos => a.cos(),
                Func::Tan => a.tan(),
                Func::Sqrt => a.sqrt(),
                Func::Abs => a.abs(),
                Func::Floor => a.floor(),
                Func::Ceil => a.ceil(),
                Func::Round => a.round(),
                Func::Min => a.min(eval(&args[1], scope)),
                Func::Max => a.max(eval(&args[1], scope)),
                Func::Log => a.ln(),
            }
        }
    }
}
