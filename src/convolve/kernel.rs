//! Square convolution kernels and their synthesis.

use nalgebra::DMatrix;

/// Square matrix of real-valued weights with odd side length.
///
/// The center index is `size / 2`. Synthesized kernels normalize even size
/// requests by bumping to the next odd value rather than rejecting them.
#[derive(Clone, Debug)]
pub struct Kernel {
    mat: DMatrix<f32>,
}

impl Kernel {
    /// Build a kernel from row-major weight rows.
    ///
    /// The matrix must be square with an odd side; unlike the synthesized
    /// constructors there is no way to normalize an arbitrary user matrix,
    /// so a malformed one is reported as an error.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self, String> {
        let size = rows.len();
        if size == 0 {
            return Err("kernel must have at least one row".to_string());
        }
        if size % 2 == 0 {
            return Err(format!("kernel side must be odd, got {size}"));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(format!(
                    "kernel row {i} has {} weights, expected {size}",
                    row.len()
                ));
            }
        }
        let mat = DMatrix::from_fn(size, size, |r, c| rows[r][c]);
        Ok(Kernel { mat })
    }

    pub(crate) fn from_array3(weights: &[[f32; 3]; 3]) -> Self {
        Kernel {
            mat: DMatrix::from_fn(3, 3, |r, c| weights[r][c]),
        }
    }

    /// Uniform kernel with every weight `1/size²`; sums to exactly 1.
    pub fn boxcar(size: usize) -> Self {
        let size = odd_size(size);
        let weight = 1.0 / (size * size) as f32;
        Kernel {
            mat: DMatrix::from_element(size, size, weight),
        }
    }

    /// Sampled Gaussian `exp(-(dx²+dy²)/(2σ²))`, normalized to sum 1.
    ///
    /// A non-positive `sigma` is normalized to a tiny positive value, which
    /// degenerates toward the identity kernel.
    pub fn gaussian(size: usize, sigma: f32) -> Self {
        let size = odd_size(size);
        let sigma = sigma.abs().max(1e-6);
        let center = (size / 2) as isize;
        let denom = 2.0 * sigma * sigma;
        let mut mat = DMatrix::from_fn(size, size, |r, c| {
            let dy = r as isize - center;
            let dx = c as isize - center;
            (-((dx * dx + dy * dy) as f32) / denom).exp()
        });
        let sum: f32 = mat.iter().sum();
        if sum > 0.0 {
            mat /= sum;
        }
        Kernel { mat }
    }

    /// Kernel with 1 at the center and 0 elsewhere; convolution with it
    /// reproduces the input exactly.
    pub fn identity(size: usize) -> Self {
        let size = odd_size(size);
        let center = size / 2;
        let mut mat = DMatrix::zeros(size, size);
        mat[(center, center)] = 1.0;
        Kernel { mat }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.mat.nrows()
    }

    #[inline]
    pub fn center(&self) -> usize {
        self.size() / 2
    }

    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f32 {
        self.mat[(row, col)]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.mat.iter().sum()
    }
}

fn odd_size(size: usize) -> usize {
    let size = size.max(1);
    if size % 2 == 0 {
        size + 1
    } else {
        size
    }
}
