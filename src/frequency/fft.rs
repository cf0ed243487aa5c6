//! Iterative in-place radix-2 FFT.

use nalgebra::{Complex, DMatrix};

/// Smallest power of two `>= n` (and at least 1).
pub fn next_pow2(n: usize) -> usize {
    n.next_power_of_two().max(1)
}

/// In-place forward FFT with twiddle factors `e^{-2πik/n}`.
///
/// Output ordering matches the textbook recursive radix-2 formulation:
/// `result[k] = even[k] + w·odd[k]`, `result[k + n/2] = even[k] - w·odd[k]`.
///
/// # Panics
/// If `data.len()` is not a power of two. Callers pad first; a violation
/// here is a defect, not a recoverable condition.
pub fn fft_in_place(data: &mut [Complex<f32>]) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    assert!(
        n.is_power_of_two(),
        "FFT length must be a power of two, got {n}"
    );

    // bit-reversal permutation
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            data.swap(i, j);
        }
    }

    // butterfly passes
    let mut len = 2;
    while len <= n {
        let angle = -2.0 * std::f32::consts::PI / len as f32;
        let w_len = Complex::new(angle.cos(), angle.sin());
        for start in (0..n).step_by(len) {
            let mut w = Complex::new(1.0, 0.0);
            for k in 0..len / 2 {
                let even = data[start + k];
                let odd = data[start + k + len / 2] * w;
                data[start + k] = even + odd;
                data[start + k + len / 2] = even - odd;
                w *= w_len;
            }
        }
        len <<= 1;
    }
}

/// 2D FFT by separability: transform every row, then every column.
///
/// Both dimensions must already be powers of two.
pub fn fft_2d(mat: &mut DMatrix<Complex<f32>>) {
    let rows = mat.nrows();
    let cols = mat.ncols();
    if rows == 0 || cols == 0 {
        return;
    }
    assert!(
        rows.is_power_of_two() && cols.is_power_of_two(),
        "FFT matrix must have power-of-two dimensions, got {rows}x{cols}"
    );

    let mut scratch = vec![Complex::new(0.0, 0.0); cols.max(rows)];
    for r in 0..rows {
        let line = &mut scratch[..cols];
        for (c, slot) in line.iter_mut().enumerate() {
            *slot = mat[(r, c)];
        }
        fft_in_place(line);
        for (c, slot) in line.iter().enumerate() {
            mat[(r, c)] = *slot;
        }
    }
    for c in 0..cols {
        let line = &mut scratch[..rows];
        for (r, slot) in line.iter_mut().enumerate() {
            *slot = mat[(r, c)];
        }
        fft_in_place(line);
        for (r, slot) in line.iter().enumerate() {
            mat[(r, c)] = *slot;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Complex<f32>, re: f32, im: f32) -> bool {
        (a.re - re).abs() < 1e-4 && (a.im - im).abs() < 1e-4
    }

    #[test]
    fn impulse_transforms_to_flat_spectrum() {
        let mut data = vec![Complex::new(0.0, 0.0); 8];
        data[0] = Complex::new(1.0, 0.0);
        fft_in_place(&mut data);
        for v in &data {
            assert!(approx(*v, 1.0, 0.0), "{v:?}");
        }
    }

    #[test]
    fn constant_transforms_to_dc_bin() {
        let mut data = vec![Complex::new(1.0, 0.0); 4];
        fft_in_place(&mut data);
        assert!(approx(data[0], 4.0, 0.0));
        for v in &data[1..] {
            assert!(approx(*v, 0.0, 0.0), "{v:?}");
        }
    }

    #[test]
    fn shifted_impulse_matches_twiddle_ladder() {
        // delta at index 1 over n=4: X[k] = e^{-2πik/4} = [1, -i, -1, i]
        let mut data = vec![Complex::new(0.0, 0.0); 4];
        data[1] = Complex::new(1.0, 0.0);
        fft_in_place(&mut data);
        assert!(approx(data[0], 1.0, 0.0));
        assert!(approx(data[1], 0.0, -1.0));
        assert!(approx(data[2], -1.0, 0.0));
        assert!(approx(data[3], 0.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn non_power_of_two_length_is_fatal() {
        let mut data = vec![Complex::new(0.0, 0.0); 6];
        fft_in_place(&mut data);
    }

    #[test]
    fn fft_2d_of_constant_concentrates_at_dc() {
        let mut mat = DMatrix::from_element(4, 8, Complex::new(1.0, 0.0));
        fft_2d(&mut mat);
        assert!(approx(mat[(0, 0)], 32.0, 0.0));
        let off_dc: f32 = mat
            .iter()
            .skip(1)
            .map(|v| v.norm())
            .fold(0.0f32, f32::max);
        assert!(off_dc < 1e-3);
    }

    #[test]
    fn next_pow2_rounds_up() {
        assert_eq!(next_pow2(0), 1);
        assert_eq!(next_pow2(1), 1);
        assert_eq!(next_pow2(5), 8);
        assert_eq!(next_pow2(256), 256);
        assert_eq!(next_pow2(257), 512);
    }
}
