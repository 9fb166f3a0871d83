//! G.7 pillar-density stress: compares the full pillar set against a coarse
//! stride-2 subset reconstructed on the same dense grid (translates
//! `xva_engine/validation/ir/interpolation/test_pillar_density.py`).

use crate::dense_grid::{logdf_linear_at_grid, make_dense_grid, zero_linear_at_grid};
use irs_core::{ensure, errors::Result, Real, Size};
use irs_grids::{PillarSet, RateCube};
use irs_math::statistics::quantile;

/// Which reconstruction scheme to stress-test pillar density under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Linear interpolation directly on zero rates.
    Zero,
    /// Linear interpolation on `ln DF`, converted back to zero rates.
    LogDf,
}

/// Per-`(path,time)` and cross-path summaries of the coarse-vs-full
/// reconstruction gap.
#[derive(Debug, Clone)]
pub struct PillarDensityStressReport {
    /// The dense maturity grid both reconstructions were compared on.
    pub grid: Vec<Real>,
    /// RMS of `coarse - full` along the dense axis, shape `(P,T)`.
    pub rms_pt: Vec<Vec<Real>>,
    /// Max-abs of `coarse - full` along the dense axis, shape `(P,T)`.
    pub maxabs_pt: Vec<Vec<Real>>,
    /// Cross-path median of `rms_pt`, one value per time step.
    pub rms_time_med: Vec<Real>,
    /// Cross-path 95th percentile of `rms_pt`, one value per time step.
    pub rms_time_p95: Vec<Real>,
    /// Cross-path 95th percentile of `maxabs_pt`, one value per time step.
    pub maxabs_time_p95: Vec<Real>,
}

/// Compare the full-pillar and coarse-pillar (stride 2, last pillar always
/// kept) reconstructions of every `(path, time)` zero-rate curve.
///
/// # Errors
/// Returns `ShapeMismatch` if the cube has fewer than 4 pillars (too few
/// for a meaningful coarse subset).
pub fn check(cube: &RateCube, pillars: &PillarSet, scheme: Scheme, points_per_interval: Size) -> Result<PillarDensityStressReport> {
    let (p_n, t_n, k_n) = cube.shape();
    ensure!(k_n >= 4, ShapeMismatch, "need at least 4 pillars for a meaningful coarse subset, got {k_n}");

    let m = pillars.years();
    let grid = make_dense_grid(&m, points_per_interval)?;

    let coarse_idx = pillars.coarse_indices();
    let m_coarse: Vec<Real> = coarse_idx.iter().map(|&idx| m[idx]).collect();

    let reconstruct = |m_axis: &[Real], row: &[Real]| -> Vec<Real> {
        match scheme {
            Scheme::Zero => zero_linear_at_grid(m_axis, row, &grid),
            Scheme::LogDf => logdf_linear_at_grid(m_axis, row, &grid),
        }
    };

    let mut rms_pt = vec![vec![0.0; t_n]; p_n];
    let mut maxabs_pt = vec![vec![0.0; t_n]; p_n];

    for p in 0..p_n {
        for t in 0..t_n {
            let row_full: Vec<Real> = (0..k_n).map(|k| cube.get(p, t, k)).collect();
            let row_coarse: Vec<Real> = coarse_idx.iter().map(|&k| cube.get(p, t, k)).collect();

            let z_full = reconstruct(&m, &row_full);
            let z_coarse = reconstruct(&m_coarse, &row_coarse);

            let diff: Vec<Real> = z_coarse.iter().zip(z_full.iter()).map(|(&a, &b)| a - b).collect();
            rms_pt[p][t] = (diff.iter().map(|&d| d * d).sum::<Real>() / diff.len() as Real).sqrt();
            maxabs_pt[p][t] = diff.iter().fold(0.0_f64, |acc, &d| acc.max(d.abs()));
        }
    }

    let mut rms_time_med = vec![0.0; t_n];
    let mut rms_time_p95 = vec![0.0; t_n];
    let mut maxabs_time_p95 = vec![0.0; t_n];
    for t in 0..t_n {
        let rms_col: Vec<Real> = (0..p_n).map(|p| rms_pt[p][t]).collect();
        let maxabs_col: Vec<Real> = (0..p_n).map(|p| maxabs_pt[p][t]).collect();
        rms_time_med[t] = quantile(&rms_col, 0.5).unwrap_or(0.0);
        rms_time_p95[t] = quantile(&rms_col, 0.95).unwrap_or(0.0);
        maxabs_time_p95[t] = quantile(&maxabs_col, 0.95).unwrap_or(0.0);
    }

    Ok(PillarDensityStressReport { grid, rms_pt, maxabs_pt, rms_time_med, rms_time_p95, maxabs_time_p95 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use irs_grids::Cube3;

    #[test]
    fn flat_curve_has_zero_density_gap() {
        let pillars = PillarSet::new(vec![90.0, 180.0, 365.0, 730.0, 1825.0]).unwrap();
        let cube = RateCube::new(Cube3::from_flat(1, 1, 5, vec![0.02; 5]).unwrap());
        let report = check(&cube, &pillars, Scheme::Zero, 4).unwrap();
        assert!(report.maxabs_pt[0][0] < 1e-12);
    }

    #[test]
    fn rejects_too_few_pillars() {
        let pillars = PillarSet::new(vec![365.0, 730.0, 1825.0]).unwrap();
        let cube = RateCube::new(Cube3::from_flat(1, 1, 3, vec![0.02; 3]).unwrap());
        assert!(check(&cube, &pillars, Scheme::Zero, 4).is_err());
    }
}
