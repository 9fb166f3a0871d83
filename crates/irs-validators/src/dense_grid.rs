//! Dense maturity grid construction and the two reconstruction schemes
//! compared by the interpolation-family validators (translates
//! `xva_engine/validation/ir/interpolation/interpolation_schemes.py`).

use crate::maturity::interp_flat_row;
use irs_core::{constants::DF_LOG_CLAMP, ensure, errors::Result, Real, Size};

/// Insert `points_per_interval` equally spaced, endpoint-excluded points into
/// every pillar interval, append the final pillar, then sort and deduplicate.
///
/// # Errors
/// Returns `InvalidGrid` if fewer than 2 pillars are given.
pub fn make_dense_grid(pillars_years: &[Real], points_per_interval: Size) -> Result<Vec<Real>> {
    ensure!(pillars_years.len() >= 2, InvalidGrid, "need at least 2 pillars to build a dense grid");
    let n = points_per_interval + 1;
    let mut grid = Vec::new();
    for w in pillars_years.windows(2) {
        let (a, b) = (w[0], w[1]);
        for j in 0..n {
            grid.push(a + (b - a) * (j as Real) / (n as Real));
        }
    }
    grid.push(*pillars_years.last().unwrap());
    grid.sort_by(|a, b| a.partial_cmp(b).unwrap());
    grid.dedup_by(|a, b| (*a - *b).abs() < 1e-14);
    Ok(grid)
}

/// Interpolate a single `(K,)` zero-rate row linearly onto `grid`, flat
/// outside the pillar range.
pub fn zero_linear_at_grid(pillars_years: &[Real], row: &[Real], grid: &[Real]) -> Vec<Real> {
    interp_flat_row(pillars_years, row, grid)
}

/// Interpolate a single `(K,)` zero-rate row by converting to `ln DF`,
/// interpolating linearly, and converting back via `z = -ln(DF) / T`.
pub fn logdf_linear_at_grid(pillars_years: &[Real], row: &[Real], grid: &[Real]) -> Vec<Real> {
    let log_df: Vec<Real> = pillars_years
        .iter()
        .zip(row.iter())
        .map(|(&m, &z)| (-z * m).max(DF_LOG_CLAMP.ln()))
        .collect();
    let log_df_grid = interp_flat_row(pillars_years, &log_df, grid);
    log_df_grid
        .iter()
        .zip(grid.iter())
        .map(|(&ln_df, &t)| -ln_df / t.max(DF_LOG_CLAMP))
        .collect()
}
