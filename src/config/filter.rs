//! Config for the `filter_demo` tool: a chain of named operations.

use crate::convolve::{self, Kernel, SobelAxis};
use crate::formula::{self, Formula};
use crate::frequency;
use crate::image::PixelBuffer;
use crate::morphology::{self, StructElement};
use crate::pointops;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct FilterToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub operations: Vec<Operation>,
    pub output: FilterOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct FilterOutputConfig {
    pub image: PathBuf,
    /// Optional JSON dump of the result's channel histograms.
    #[serde(default)]
    pub histogram_json: Option<PathBuf>,
}

/// One operation of the processing chain, dispatched by the `op` tag.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Negative,
    GammaCorrection {
        gamma: f32,
        #[serde(default = "default_scale")]
        c: f32,
    },
    LogTransform {
        #[serde(default = "default_scale")]
        c: f32,
    },
    Quantize {
        levels: u32,
    },
    EqualizeHistogram,
    BoxBlur {
        size: usize,
    },
    GaussianBlur {
        size: usize,
        sigma: f32,
    },
    Sharpen,
    Laplacian,
    Sobel {
        axis: SobelAxis,
    },
    Threshold {
        value: f32,
    },
    Erode,
    Dilate,
    Open,
    Close,
    Formula {
        expr: String,
    },
    Kernel {
        rows: Vec<Vec<f32>>,
    },
    Spectrum,
}

fn default_scale() -> f32 {
    1.0
}

impl Operation {
    /// Run this operation on `src`. Only user-supplied formulas and kernel
    /// matrices can fail; the built-in operations normalize their
    /// parameters silently.
    pub fn apply(&self, src: &PixelBuffer) -> Result<PixelBuffer, String> {
        let out = match self {
            Operation::Negative => pointops::negative(src),
            Operation::GammaCorrection { gamma, c } => pointops::gamma_correction(src, *gamma, *c),
            Operation::LogTransform { c } => pointops::log_transform(src, *c),
            Operation::Quantize { levels } => pointops::quantize(src, *levels),
            Operation::EqualizeHistogram => pointops::equalize_histogram(src),
            Operation::BoxBlur { size } => convolve::box_blur(src, *size),
            Operation::GaussianBlur { size, sigma } => convolve::gaussian_blur(src, *size, *sigma),
            Operation::Sharpen => convolve::sharpen(src),
            Operation::Laplacian => convolve::laplacian(src),
            Operation::Sobel { axis } => convolve::sobel(src, *axis),
            Operation::Threshold { value } => morphology::threshold(src, *value),
            Operation::Erode => morphology::erode(src, &StructElement::FULL_8),
            Operation::Dilate => morphology::dilate(src, &StructElement::FULL_8),
            Operation::Open => morphology::open(src, &StructElement::FULL_8),
            Operation::Close => morphology::close(src, &StructElement::FULL_8),
            Operation::Formula { expr } => Formula::parse(expr)?.apply(src),
            Operation::Kernel { rows } => {
                let kernel = Kernel::from_rows(rows)?;
                formula::apply_kernel(src, &kernel)
            }
            Operation::Spectrum => frequency::magnitude_spectrum(src),
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_deserialize_from_tagged_json() {
        let json = r#"[
            { "op": "negative" },
            { "op": "gamma_correction", "gamma": 0.5 },
            { "op": "gaussian_blur", "size": 5, "sigma": 1.5 },
            { "op": "sobel", "axis": "magnitude" },
            { "op": "formula", "expr": "255 - r" },
            { "op": "kernel", "rows": [[0,0,0],[0,1,0],[0,0,0]] }
        ]"#;
        let ops: Vec<Operation> = serde_json::from_str(json).unwrap();
        assert_eq!(ops.len(), 6);
        let img = PixelBuffer::new(2, 2);
        for op in &ops {
            op.apply(&img).unwrap();
        }
    }

    #[test]
    fn malformed_formula_surfaces_a_parse_error() {
        let op = Operation::Formula {
            expr: "r +".to_string(),
        };
        let err = op.apply(&PixelBuffer::new(1, 1)).unwrap_err();
        assert!(err.contains("end of input"), "{err}");
    }
}
