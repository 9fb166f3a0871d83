//! Deterministic mean function builder (translates
//! `xva_engine/simulation/risk_factors/ir/mean_function.py`).

use irs_core::{ensure, errors::Result, Real};
use irs_curves::DiscountCurve;
use irs_grids::{PillarSet, TimeGrid};
use irs_math::Matrix;

/// Builds the deterministic target `g(t,k) = max(f_k(t), delta_floor)` that
/// the Ultimate Base Curve transform centres its shifted-exponential
/// distribution around.
///
/// `f_k(t_i) = -(1/M_k) * ln( DF(0, t_i + M_k) / DF(0, t_i) )` is the
/// forward-forward rate implied by the discount curve between `t_i` and
/// `t_i + M_k`.
pub struct MeanFunctionBuilder;

impl MeanFunctionBuilder {
    /// Build the `(T, K)` mean function array from a discount curve.
    ///
    /// # Errors
    /// Returns `InvalidCurve` if `DF(0, t_i + M_k) <= 0` or `DF(0, t_i) <= 0`
    /// for any `(i, k)`, since the forward-forward rate requires a
    /// logarithm of their ratio.
    pub fn build(
        time_grid: &TimeGrid,
        pillars: &PillarSet,
        curve: &dyn DiscountCurve,
        delta_floor: Real,
    ) -> Result<Matrix> {
        let t = time_grid.as_slice();
        let m = pillars.years();
        let (tn, k) = (t.len(), m.len());

        let mut g = Matrix::zeros(tn, k);
        for (i, &ti) in t.iter().enumerate() {
            let df_t = curve.discount(ti);
            ensure!(df_t > 0.0, InvalidCurve, "DF(0, {ti}) must be positive, got {df_t}");
            for (kk, &mk) in m.iter().enumerate() {
                let df_tm = curve.discount(ti + mk);
                ensure!(
                    df_tm > 0.0,
                    InvalidCurve,
                    "DF(0, {}) must be positive, got {df_tm}",
                    ti + mk
                );
                let f = -(1.0 / mk) * (df_tm / df_t).ln();
                g[(i, kk)] = f.max(delta_floor);
            }
        }
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irs_curves::FlatForwardCurve;

    #[test]
    fn flat_curve_gives_constant_mean_function() {
        let time_grid = TimeGrid::new(vec![0.0, 1.0, 2.0]).unwrap();
        let pillars = PillarSet::new(vec![365.0, 1825.0]).unwrap();
        let curve = FlatForwardCurve::new(0.02);

        let g = MeanFunctionBuilder::build(&time_grid, &pillars, &curve, 1e-8).unwrap();
        for i in 0..3 {
            for k in 0..2 {
                assert!((g[(i, k)] - 0.02).abs() < 1e-10, "g({i},{k}) = {}", g[(i, k)]);
            }
        }
    }

    #[test]
    fn floor_applies_when_forward_is_negative() {
        // An upward-sloping curve (DF increasing forward in time) gives a
        // negative forward-forward rate, which must be floored.
        let time_grid = TimeGrid::new(vec![0.0]).unwrap();
        let pillars = PillarSet::new(vec![365.0, 730.0]).unwrap();
        struct Rising;
        impl DiscountCurve for Rising {
            fn discount(&self, t: irs_core::Time) -> irs_core::DiscountFactor {
                // DF increases with t (arbitrageable, but a valid numeric input)
                1.0 + 0.01 * t
            }
        }
        let g = MeanFunctionBuilder::build(&time_grid, &pillars, &Rising, 1e-8).unwrap();
        assert_eq!(g[(0, 0)], 1e-8);
        assert_eq!(g[(0, 1)], 1e-8);
    }

    #[test]
    fn rejects_non_positive_discount_factor() {
        let time_grid = TimeGrid::new(vec![0.0]).unwrap();
        let pillars = PillarSet::new(vec![365.0, 730.0]).unwrap();
        struct Negative;
        impl DiscountCurve for Negative {
            fn discount(&self, _t: irs_core::Time) -> irs_core::DiscountFactor {
                -1.0
            }
        }
        assert!(MeanFunctionBuilder::build(&time_grid, &pillars, &Negative, 1e-8).is_err());
    }
}
