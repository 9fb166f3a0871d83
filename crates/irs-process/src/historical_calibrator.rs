//! Historical calibration of the driver correlation matrix and per-pillar
//! volatilities from an observed rate history (translates
//! `xva_engine/simulation/risk_factors/ir/calibration_historical.py`).

use crate::process_parameters::BP;
use irs_core::{ensure, errors::Result, Real, Size};
use irs_math::Matrix;

/// Trading days per year used to annualise the return horizon, matching the
/// reference implementation's `dt = h / 252` convention. Deliberately kept
/// separate from a curve's day-count basis (see [`irs_grids::PillarSet`]):
/// this is a property of the historical sampling frequency, not the
/// maturity convention of the pillars being calibrated.
pub const TRADING_DAYS_PER_YEAR: Real = 252.0;

/// Default return horizon in business days, matching the reference
/// implementation's default sampling interval.
pub const DEFAULT_RETURN_HORIZON_DAYS: Size = 5;

/// Configuration for [`estimate_corr_and_sigma`].
///
/// `lam` and `shift_bp` are global scalars applied uniformly across
/// pillars during calibration — this mirrors the reference implementation,
/// which calibrates one mean-reversion speed and one shift for the whole
/// curve and broadcasts them to `K` on return. A caller who later wants
/// per-pillar `lambda`/`shift` for simulation builds
/// [`crate::process_parameters::UltimateBaseCurveParams`] separately.
///
/// The return horizon (`h`, in business days) and the trading-day
/// annualisation are independent knobs: callers whose history is sampled at
/// a different frequency than `h` days, or whose year convention is not
/// 252 trading days, must set `return_horizon_days` accordingly — this
/// crate does not infer sampling frequency from the data.
#[derive(Debug, Clone, Copy)]
pub struct HistoricalCalibConfig {
    /// Mean-reversion speed shared across all pillars during calibration.
    pub lam: Real,
    /// Shift, in basis points, shared across all pillars during
    /// calibration.
    pub shift_bp: Real,
    /// Number of business days between consecutive historical observations
    /// (`h`; default [`DEFAULT_RETURN_HORIZON_DAYS`]).
    pub return_horizon_days: Size,
}

impl HistoricalCalibConfig {
    /// Build a config with the default `h = 5` business-day horizon.
    pub fn new(lam: Real, shift_bp: Real) -> Self {
        Self { lam, shift_bp, return_horizon_days: DEFAULT_RETURN_HORIZON_DAYS }
    }
}

/// Estimate the `K x K` sample correlation matrix and per-pillar `sigma`
/// from a `(N, K)` history of rate levels, given a global mean-reversion
/// speed and shift.
///
/// `rates_hist` holds `N` time-ordered observations of the `K` pillar
/// levels. Shifted log-returns `r_i = ln((Y_i + s) / (Y_{i-1} + s))`,
/// `s = shift_bp * 1e-4`, are computed per pillar, then:
/// - the correlation matrix is the pairwise (NaN-safe) Pearson correlation
///   of the return columns, with the diagonal forced to exactly `1.0`;
/// - `sigma_k` is solved from the sample variance `v_k` of `r_k` via the OU
///   exact-step variance identity `v = sigma^2 * (1 - exp(-2*lambda*dt)) /
///   (2*lambda)`, i.e. `sigma_k = sqrt(v_k * 2*lambda / (1 -
///   exp(-2*lambda*dt)))`, with `dt = h / 252`.
///
/// Returns `(corr, sigma, lambda broadcast to K)`, matching the reference
/// implementation's return shape.
///
/// # Errors
/// Returns `ShapeMismatch` if `rates_hist` has fewer than 2 rows. Returns
/// `NonPositiveShift` if `Y + s <= 0` for any observation.
pub fn estimate_corr_and_sigma(rates_hist: &Matrix, cfg: &HistoricalCalibConfig) -> Result<(Matrix, Vec<Real>, Vec<Real>)> {
    let n = rates_hist.rows();
    let k = rates_hist.cols();
    ensure!(n >= 2, ShapeMismatch, "need at least 2 historical observations, got {n}");

    let s = cfg.shift_bp * BP;
    let mut returns = Matrix::zeros(n - 1, k);
    for kk in 0..k {
        for i in 0..n - 1 {
            let y_prev = rates_hist[(i, kk)] + s;
            let y_next = rates_hist[(i + 1, kk)] + s;
            ensure!(y_prev > 0.0, NonPositiveShift, "Y + shift must be positive at row {i}, pillar {kk}, got {y_prev}");
            ensure!(y_next > 0.0, NonPositiveShift, "Y + shift must be positive at row {}, pillar {kk}, got {y_next}", i + 1);
            returns[(i, kk)] = (y_next / y_prev).ln();
        }
    }

    let corr = sample_correlation_nan_safe(&returns);

    let dt = cfg.return_horizon_days as Real / TRADING_DAYS_PER_YEAR;
    let lam = cfg.lam;
    // Exact-step OU variance: v = sigma^2 * (1 - exp(-2*lambda*dt)) / (2*lambda).
    // As lambda -> 0 the bracketed term -> 2*lambda*dt, so the ratio -> dt.
    let denom = if lam.abs() < irs_core::constants::LAMBDA_EPS {
        dt
    } else {
        (1.0 - (-2.0 * lam * dt).exp()) / (2.0 * lam)
    };
    let sigma: Vec<Real> = (0..k)
        .map(|kk| {
            let var_r = column_variance_nan_safe(&returns, kk);
            (var_r / denom).max(0.0).sqrt()
        })
        .collect();

    let lam_broadcast = vec![lam; k];
    Ok((corr, sigma, lam_broadcast))
}

fn column_variance_nan_safe(returns: &Matrix, col: Size) -> Real {
    let vals: Vec<Real> = (0..returns.rows()).map(|i| returns[(i, col)]).filter(|v| !v.is_nan()).collect();
    let n = vals.len() as Real;
    if n < 2.0 {
        return 0.0;
    }
    let mean = vals.iter().sum::<Real>() / n;
    vals.iter().map(|v| (v - mean).powi(2)).sum::<Real>() / (n - 1.0)
}

fn sample_correlation_nan_safe(returns: &Matrix) -> Matrix {
    let k = returns.cols();
    let n = returns.rows();
    let mut corr = Matrix::identity(k);
    for a in 0..k {
        for b in (a + 1)..k {
            let mut xs = Vec::with_capacity(n);
            let mut ys = Vec::with_capacity(n);
            for i in 0..n {
                let x = returns[(i, a)];
                let y = returns[(i, b)];
                if !x.is_nan() && !y.is_nan() {
                    xs.push(x);
                    ys.push(y);
                }
            }
            let rho = if xs.len() < 2 {
                0.0
            } else {
                let mean_x = xs.iter().sum::<Real>() / xs.len() as Real;
                let mean_y = ys.iter().sum::<Real>() / ys.len() as Real;
                let mut cov = 0.0;
                let mut var_x = 0.0;
                let mut var_y = 0.0;
                for (&x, &y) in xs.iter().zip(ys.iter()) {
                    cov += (x - mean_x) * (y - mean_y);
                    var_x += (x - mean_x).powi(2);
                    var_y += (y - mean_y).powi(2);
                }
                if var_x <= 0.0 || var_y <= 0.0 {
                    0.0
                } else {
                    cov / (var_x.sqrt() * var_y.sqrt())
                }
            };
            corr[(a, b)] = rho;
            corr[(b, a)] = rho;
        }
    }
    corr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_history_gives_zero_sigma() {
        let rates_hist = Matrix::from_row_slice(5, 2, &[
            0.02, 0.03, 0.02, 0.03, 0.02, 0.03, 0.02, 0.03, 0.02, 0.03,
        ]);
        let cfg = HistoricalCalibConfig { lam: 0.1, shift_bp: 100.0, return_horizon_days: 1 };
        let (corr, sigma, lam) = estimate_corr_and_sigma(&rates_hist, &cfg).unwrap();
        assert!((sigma[0]).abs() < 1e-12);
        assert!((sigma[1]).abs() < 1e-12);
        assert_eq!(corr[(0, 0)], 1.0);
        assert_eq!(corr[(1, 1)], 1.0);
        assert_eq!(lam, vec![0.1, 0.1]);
    }

    #[test]
    fn perfectly_correlated_pillars_give_rho_one() {
        let rates_hist = Matrix::from_row_slice(6, 2, &[
            0.020, 0.040, 0.021, 0.042, 0.019, 0.038, 0.022, 0.044, 0.018, 0.036, 0.023, 0.046,
        ]);
        let cfg = HistoricalCalibConfig::new(0.1, 100.0);
        let (corr, _sigma, _lam) = estimate_corr_and_sigma(&rates_hist, &cfg).unwrap();
        assert!((corr[(0, 1)] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn default_config_uses_five_day_horizon() {
        let cfg = HistoricalCalibConfig::new(0.1, 100.0);
        assert_eq!(cfg.return_horizon_days, DEFAULT_RETURN_HORIZON_DAYS);
    }

    #[test]
    fn rejects_too_short_history() {
        let rates_hist = Matrix::from_row_slice(1, 2, &[0.02, 0.03]);
        let cfg = HistoricalCalibConfig::new(0.1, 100.0);
        assert!(estimate_corr_and_sigma(&rates_hist, &cfg).is_err());
    }

    #[test]
    fn rejects_non_positive_shifted_level() {
        let rates_hist = Matrix::from_row_slice(2, 1, &[-0.01, 0.02]);
        let cfg = HistoricalCalibConfig::new(0.1, 50.0);
        assert!(estimate_corr_and_sigma(&rates_hist, &cfg).is_err());
    }
}
