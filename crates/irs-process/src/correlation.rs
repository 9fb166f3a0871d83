//! Pillar correlation handling: ridge regularisation and Cholesky
//! factorisation (§9 "Correlation handling" of the core specification).

use irs_core::{constants::CORRELATION_RIDGE, ensure, errors::Result, Size};
use irs_math::{matrix_utilities::cholesky_decomposition, Matrix};

/// A `K x K` correlation matrix, stored only as its lower-triangular
/// Cholesky factor after construction.
///
/// Factorisation always adds the `1e-12` ridge first, whether or not the
/// raw matrix is already positive semi-definite — the ridge is part of the
/// contract, not an ad-hoc fix for borderline inputs.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    chol: Matrix,
}

impl CorrelationMatrix {
    /// Factorise `corr + ridge * I`.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if `corr` is not square, and
    /// `NonSPDCorrelation` if Cholesky fails even after the ridge.
    pub fn from_corr(corr: &Matrix) -> Result<Self> {
        ensure!(corr.is_square(), ShapeMismatch, "correlation matrix must be square, got {}x{}", corr.rows(), corr.cols());
        let k = corr.rows();
        let ridged = corr + &Matrix::identity(k).scale(CORRELATION_RIDGE);
        let chol = cholesky_decomposition(&ridged).ok_or_else(|| {
            irs_core::errors::Error::NonSPDCorrelation(
                "Cholesky factorisation failed even after the 1e-12 ridge".to_string(),
            )
        })?;
        Ok(Self { chol })
    }

    /// The `K x K` identity correlation (independent pillars).
    pub fn identity(k: Size) -> Self {
        // Cholesky of (I + ridge*I) is diagonal with entries sqrt(1+ridge);
        // go through the regular path so both constructors agree exactly.
        Self::from_corr(&Matrix::identity(k)).expect("identity plus ridge is always SPD")
    }

    /// Number of pillars `K`.
    pub fn k(&self) -> Size {
        self.chol.rows()
    }

    /// The lower-triangular Cholesky factor `L` such that `L * L^T = corr + ridge * I`.
    pub fn cholesky_factor(&self) -> &Matrix {
        &self.chol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_correlation_factorises() {
        let c = CorrelationMatrix::identity(3);
        assert_eq!(c.k(), 3);
        let l = c.cholesky_factor();
        // off-diagonal entries must vanish for an (uncorrelated) identity input
        assert!((l[(1, 0)]).abs() < 1e-12);
        assert!((l[(0, 0)] * l[(0, 0)] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn reconstructs_ridged_correlation() {
        let corr = Matrix::from_row_slice(2, 2, &[1.0, 0.5, 0.5, 1.0]);
        let c = CorrelationMatrix::from_corr(&corr).unwrap();
        let l = c.cholesky_factor();
        let reconstructed = l * &l.transpose();
        for i in 0..2 {
            for j in 0..2 {
                let expected = corr[(i, j)] + if i == j { CORRELATION_RIDGE } else { 0.0 };
                assert!((reconstructed[(i, j)] - expected).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn rejects_non_square() {
        let corr = Matrix::from_row_slice(2, 3, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert!(CorrelationMatrix::from_corr(&corr).is_err());
    }

    #[test]
    fn rejects_non_spd_even_with_ridge() {
        // A matrix whose negative eigenvalue is far larger than the ridge
        // stays non-SPD after regularisation.
        let corr = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 1.0]);
        assert!(CorrelationMatrix::from_corr(&corr).is_err());
    }
}
