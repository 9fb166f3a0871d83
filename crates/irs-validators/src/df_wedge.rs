//! G.4 one-step discount-factor wedge (translates
//! `xva_engine/validation/ir/arbitrage_free/metrics.py::df_wedge_one_step`).

use crate::maturity::interp_flat_row;
use irs_core::{constants::WEDGE_ONE_BP, ensure, errors::Result, Real, Size};
use irs_grids::{PillarSet, RateCube, TimeGrid};
use irs_math::statistics::quantile;

/// Per-path wedge values and their summary statistics.
#[derive(Debug, Clone)]
pub struct DfWedgeReport {
    /// The one-step horizon `u = t[i+1] - t[i]`.
    pub u: Real,
    /// The base-pillar maturity `T_long = M[k_base]`.
    pub t_long: Real,
    /// `wedge(p) = ln DF_long - ln DF_short - ln DF_rem`, one value per path.
    pub wedge: Vec<Real>,
    /// Mean wedge across paths.
    pub mean: Real,
    /// 5th percentile.
    pub p05: Real,
    /// 95th percentile.
    pub p95: Real,
    /// Fraction of paths with `|wedge| > 1e-4` (about 1bp in log-DF units).
    pub frac_abs_gt_one_bp: Real,
}

/// Compare a base-pillar discount factor against the product of two
/// maturity-interpolated sub-step discount factors.
///
/// # Errors
/// Returns `BadWedgeConfiguration` if `u <= 0` or `u >= T_long`.
pub fn check(
    cube: &RateCube,
    time_grid: &TimeGrid,
    pillars: &PillarSet,
    base_pillar_index: Size,
    step_index: Size,
) -> Result<DfWedgeReport> {
    let t = time_grid.as_slice();
    let m = pillars.years();
    let u = t[step_index + 1] - t[step_index];
    let t_long = m[base_pillar_index];

    ensure!(
        u > 0.0 && u < t_long,
        BadWedgeConfiguration,
        "need 0 < u < T_long, got u={u}, T_long={t_long}"
    );

    let (p_n, _t_n, _k_n) = cube.shape();
    let mut wedge = Vec::with_capacity(p_n);
    for p in 0..p_n {
        let row_t: Vec<Real> = (0..m.len()).map(|k| cube.get(p, step_index, k)).collect();
        let row_tu: Vec<Real> = (0..m.len()).map(|k| cube.get(p, step_index + 1, k)).collect();

        let y_long = cube.get(p, step_index, base_pillar_index);
        let ln_df_long = -y_long * t_long;

        let y_u = interp_flat_row(&m, &row_t, &[u])[0];
        let ln_df_short = -y_u * u;

        let y_rem = interp_flat_row(&m, &row_tu, &[t_long - u])[0];
        let ln_df_rem = -y_rem * (t_long - u);

        wedge.push(ln_df_long - ln_df_short - ln_df_rem);
    }

    let n = wedge.len() as Real;
    let mean = wedge.iter().sum::<Real>() / n;
    let p05 = quantile(&wedge, 0.05).unwrap_or(mean);
    let p95 = quantile(&wedge, 0.95).unwrap_or(mean);
    let frac_abs_gt_one_bp = wedge.iter().filter(|&&w| w.abs() > WEDGE_ONE_BP).count() as Real / n;

    Ok(DfWedgeReport { u, t_long, wedge, mean, p05, p95, frac_abs_gt_one_bp })
}

#[cfg(test)]
mod tests {
    use super::*;
    use irs_grids::Cube3;

    #[test]
    fn flat_curve_has_near_zero_wedge() {
        let time_grid = TimeGrid::new(vec![0.0, 0.5, 1.0]).unwrap();
        let pillars = PillarSet::new(vec![182.0, 365.0, 730.0]).unwrap();
        // a flat 2% continuously-compounded curve at every pillar and time
        let data = vec![0.02; 2 * 3 * 3];
        let cube = RateCube::new(Cube3::from_flat(2, 3, 3, data).unwrap());
        let report = check(&cube, &time_grid, &pillars, 1, 0).unwrap();
        for &w in &report.wedge {
            assert!(w.abs() < 1e-9, "got {w}");
        }
    }

    #[test]
    fn rejects_step_at_or_beyond_base_pillar() {
        let time_grid = TimeGrid::new(vec![0.0, 5.0]).unwrap();
        let pillars = PillarSet::new(vec![365.0, 730.0]).unwrap();
        let cube = RateCube::new(Cube3::from_flat(1, 2, 2, vec![0.02; 4]).unwrap());
        assert!(check(&cube, &time_grid, &pillars, 0, 0).is_err());
    }
}
