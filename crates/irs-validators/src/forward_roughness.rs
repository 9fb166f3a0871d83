//! G.6 forward roughness proxy (translates
//! `xva_engine/validation/ir/interpolation/metrics.py::forward_roughness`).

use crate::dense_grid::{logdf_linear_at_grid, make_dense_grid, zero_linear_at_grid};
use crate::numerics::{gradient_edge_order1, trapz};
use irs_core::{errors::Result, Real, Size};
use irs_grids::{PillarSet, RateCube};

/// Per-`(path,time)` roughness under both reconstruction schemes.
#[derive(Debug, Clone)]
pub struct ForwardRoughnessReport {
    /// The dense maturity grid the forward curve was built on.
    pub grid: Vec<Real>,
    /// `integral |d^2 f / dT^2| dT` under the `zero-linear` scheme.
    pub roughness_zero: Vec<Vec<Real>>,
    /// `integral |d^2 f / dT^2| dT` under the `logdf-linear` scheme.
    pub roughness_logdf: Vec<Vec<Real>>,
}

/// Build `f(T) = d(T*z(T))/dT` on a dense grid under both schemes, then
/// integrate `|d^2 f / dT^2|` over `T` by the trapezoidal rule.
///
/// # Errors
/// Returns `InvalidGrid` if the pillar set has fewer than 2 pillars.
pub fn check(cube: &RateCube, pillars: &PillarSet, points_per_interval: Size) -> Result<ForwardRoughnessReport> {
    let m = pillars.years();
    let grid = make_dense_grid(&m, points_per_interval)?;
    let (p_n, t_n, k_n) = cube.shape();

    let mut roughness_zero = vec![vec![0.0; t_n]; p_n];
    let mut roughness_logdf = vec![vec![0.0; t_n]; p_n];

    for p in 0..p_n {
        for t in 0..t_n {
            let row: Vec<Real> = (0..k_n).map(|k| cube.get(p, t, k)).collect();
            roughness_zero[p][t] = roughness_of(&m, &row, &grid, zero_linear_at_grid);
            roughness_logdf[p][t] = roughness_of(&m, &row, &grid, logdf_linear_at_grid);
        }
    }

    Ok(ForwardRoughnessReport { grid, roughness_zero, roughness_logdf })
}

fn roughness_of(
    m: &[Real],
    row: &[Real],
    grid: &[Real],
    scheme: impl Fn(&[Real], &[Real], &[Real]) -> Vec<Real>,
) -> Real {
    let z = scheme(m, row, grid);
    let tz: Vec<Real> = z.iter().zip(grid.iter()).map(|(&zi, &t)| zi * t).collect();
    let f = gradient_edge_order1(grid, &tz);
    let d2f = gradient_edge_order1(grid, &f);
    let abs_d2f: Vec<Real> = d2f.iter().map(|&d| d.abs()).collect();
    trapz(grid, &abs_d2f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use irs_grids::Cube3;

    #[test]
    fn flat_curve_has_near_zero_roughness() {
        let pillars = PillarSet::new(vec![365.0, 730.0, 1825.0, 3650.0]).unwrap();
        let cube = RateCube::new(Cube3::from_flat(1, 1, 4, vec![0.02, 0.02, 0.02, 0.02]).unwrap());
        let report = check(&cube, &pillars, 4).unwrap();
        assert!(report.roughness_zero[0][0] < 1e-8, "got {}", report.roughness_zero[0][0]);
        assert!(report.roughness_logdf[0][0] < 1e-6, "got {}", report.roughness_logdf[0][0]);
    }

    #[test]
    fn kinked_curve_has_nonzero_roughness() {
        let pillars = PillarSet::new(vec![365.0, 730.0, 1095.0, 3650.0]).unwrap();
        let cube = RateCube::new(Cube3::from_flat(1, 1, 4, vec![0.01, 0.05, 0.01, 0.02]).unwrap());
        let report = check(&cube, &pillars, 4).unwrap();
        assert!(report.roughness_zero[0][0] > 0.0);
    }
}
