//! Piecewise-linear discount curve built from a sampled `(time, DF)` table.

use crate::DiscountCurve;
use irs_core::{ensure, errors::Result, DiscountFactor, Time};
use irs_math::interpolations::{Interpolation1D, LinearInterpolation};

/// A discount curve defined by linear interpolation over a strictly
/// increasing table of sample times (and linear extrapolation beyond the
/// ends, following the same convention as the boundary segment).
///
/// Grounded on `market_data/objects/yield_curve.py`'s `YieldCurve.df`/
/// `zero_rate`, which extrapolates via the nearest boundary segment's slope.
#[derive(Debug, Clone)]
pub struct InterpolatedDiscountCurve {
    interp: LinearInterpolation,
}

impl InterpolatedDiscountCurve {
    /// Build a curve from parallel `times`/`dfs` tables.
    ///
    /// # Errors
    /// Returns `InvalidGrid` if the tables differ in length, have fewer than
    /// two points, or `times` is not strictly increasing. Returns
    /// `InvalidCurve` if any `dfs` entry is non-positive.
    pub fn new(times: Vec<Time>, dfs: Vec<DiscountFactor>) -> Result<Self> {
        ensure!(times.len() == dfs.len(), InvalidGrid, "times and dfs must have the same length");
        ensure!(dfs.iter().all(|&df| df > 0.0), InvalidCurve, "all discount factors must be positive");
        let interp = LinearInterpolation::new(&times, &dfs)?;
        Ok(Self { interp })
    }
}

impl DiscountCurve for InterpolatedDiscountCurve {
    fn discount(&self, t: Time) -> DiscountFactor {
        self.interp.operator(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_samples() {
        let curve = InterpolatedDiscountCurve::new(vec![0.0, 1.0, 2.0], vec![1.0, 0.9, 0.8]).unwrap();
        assert!((curve.discount(0.5) - 0.95).abs() < 1e-12);
    }

    #[test]
    fn extrapolates_via_boundary_slope() {
        let curve = InterpolatedDiscountCurve::new(vec![0.0, 1.0, 2.0], vec![1.0, 0.9, 0.8]).unwrap();
        // boundary segment slope is -0.1 per year on both sides
        assert!((curve.discount(-1.0) - 1.1).abs() < 1e-12);
        assert!((curve.discount(3.0) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_df() {
        assert!(InterpolatedDiscountCurve::new(vec![0.0, 1.0], vec![1.0, -0.1]).is_err());
    }

    #[test]
    fn rejects_non_increasing_times() {
        assert!(InterpolatedDiscountCurve::new(vec![1.0, 0.5], vec![0.9, 1.0]).is_err());
    }
}
