//! Matrix decomposition utilities (translates `ql/math/matrixutilities/`).
//!
//! Only Cholesky factorisation is needed here: the correlated OU drivers in
//! the Ultimate Base Curve process map independent normals through the
//! lower-triangular factor of the (ridged) correlation matrix.

use crate::matrix::Matrix;

/// Cholesky decomposition of a symmetric positive-definite matrix.
///
/// Returns the lower-triangular factor `L` such that `A = L * Lᵀ`, or
/// `None` if `m` is not square or not positive-definite.
///
/// Corresponds to `QuantLib::CholeskyDecomposition`.
pub fn cholesky_decomposition(m: &Matrix) -> Option<Matrix> {
    let inner = m.inner();
    if inner.nrows() != inner.ncols() {
        return None;
    }
    inner.clone().cholesky().map(|chol| Matrix::from(chol.l()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cholesky_2x2() {
        let m = Matrix::from_row_slice(2, 2, &[4.0, 2.0, 2.0, 10.0]);
        let l = cholesky_decomposition(&m).unwrap();
        let reconstructed = &l * &l.transpose();
        for i in 0..2 {
            for j in 0..2 {
                assert!(
                    (reconstructed[(i, j)] - m[(i, j)]).abs() < 1e-10,
                    "mismatch at ({i},{j})"
                );
            }
        }
    }

    #[test]
    fn cholesky_not_positive_definite() {
        let m = Matrix::from_row_slice(2, 2, &[-1.0, 0.0, 0.0, 1.0]);
        assert!(cholesky_decomposition(&m).is_none());
    }

    #[test]
    fn cholesky_not_square() {
        let m = Matrix::from_row_slice(2, 3, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert!(cholesky_decomposition(&m).is_none());
    }
}
