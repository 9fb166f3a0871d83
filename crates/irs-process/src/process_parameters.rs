//! Per-pillar parameters of the Ultimate Base Curve process.

use irs_core::{ensure, errors::Result, Real, Size};

/// Basis-point to decimal-rate conversion factor.
pub const BP: Real = 1e-4;

/// Per-pillar shift, volatility, and mean-reversion speed for the shifted
/// exponential Vasicek drivers, plus the shared numerical floor.
///
/// `K` (the pillar count) is inferred from the length of `shift_bp`; the
/// other two vectors must have the same length. Shift is stored in basis
/// points, matching the reference implementation's input convention, and
/// converted to decimal rate units (`s_k = shift_bp_k * 1e-4`) on read.
#[derive(Debug, Clone)]
pub struct UltimateBaseCurveParams {
    shift_bp: Vec<Real>,
    shift: Vec<Real>,
    sigma: Vec<Real>,
    lam: Vec<Real>,
    delta_floor: Real,
}

impl UltimateBaseCurveParams {
    /// Build per-pillar parameters from a shift expressed in basis points.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if `shift_bp`, `sigma`, and `lam` do not all
    /// have the same length, or if that length is zero. Returns
    /// `NonPositiveShift` if any shift is non-positive, since the
    /// shifted-exponential transform divides by `(g + s)`.
    pub fn new(shift_bp: Vec<Real>, sigma: Vec<Real>, lam: Vec<Real>, delta_floor: Real) -> Result<Self> {
        let k = shift_bp.len();
        ensure!(k > 0, ShapeMismatch, "at least one pillar is required");
        ensure!(
            sigma.len() == k && lam.len() == k,
            ShapeMismatch,
            "shift_bp ({}), sigma ({}), and lam ({}) must have equal length",
            k,
            sigma.len(),
            lam.len()
        );
        for (kk, &s_bp) in shift_bp.iter().enumerate() {
            ensure!(s_bp > 0.0, NonPositiveShift, "shift at pillar {kk} must be positive, got {s_bp} bp");
        }
        let shift = shift_bp.iter().map(|&s_bp| s_bp * BP).collect();
        Ok(Self { shift_bp, shift, sigma, lam, delta_floor })
    }

    /// Number of pillars `K`.
    pub fn k(&self) -> Size {
        self.shift_bp.len()
    }

    /// Per-pillar shift in raw basis points, as supplied at construction.
    pub fn shift_bp(&self) -> &[Real] {
        &self.shift_bp
    }

    /// Per-pillar shift `s_k` in decimal rate units (`shift_bp_k * 1e-4`),
    /// the units used by the shifted-exponential transform and the mean
    /// function.
    pub fn shift(&self) -> &[Real] {
        &self.shift
    }

    /// Per-pillar driver volatility `sigma_k`.
    pub fn sigma(&self) -> &[Real] {
        &self.sigma
    }

    /// Per-pillar mean-reversion speed `lambda_k`.
    pub fn lambda(&self) -> &[Real] {
        &self.lam
    }

    /// Floor applied to the deterministic mean function `g(t,k)`.
    pub fn delta_floor(&self) -> Real {
        self.delta_floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_matching_lengths() {
        let p = UltimateBaseCurveParams::new(vec![100.0, 100.0], vec![0.2, 0.25], vec![0.1, 0.05], 1e-8).unwrap();
        assert_eq!(p.k(), 2);
        assert_eq!(p.shift_bp(), &[100.0, 100.0]);
        assert!((p.shift()[0] - 0.01).abs() < 1e-15);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert!(UltimateBaseCurveParams::new(vec![100.0, 100.0], vec![0.2], vec![0.1, 0.05], 1e-8).is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(UltimateBaseCurveParams::new(vec![], vec![], vec![], 1e-8).is_err());
    }

    #[test]
    fn rejects_non_positive_shift() {
        assert!(UltimateBaseCurveParams::new(vec![100.0, -1.0], vec![0.2, 0.2], vec![0.1, 0.1], 1e-8).is_err());
        assert!(UltimateBaseCurveParams::new(vec![100.0, 0.0], vec![0.2, 0.2], vec![0.1, 0.1], 1e-8).is_err());
    }
}
