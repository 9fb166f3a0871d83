//! The Ultimate Base Curve process: correlated exact-step Ornstein-Uhlenbeck
//! drivers pushed through the shifted-exponential transform (translates
//! `xva_engine/simulation/risk_factors/ir/ultimate_base_curve_process.py`).

use crate::correlation::CorrelationMatrix;
use crate::process_parameters::UltimateBaseCurveParams;
use irs_core::{constants::LAMBDA_EPS, ensure, errors::Result, Real, Size};
use irs_grids::{Cube3, DriverCube, RateCube, TimeGrid};
use irs_math::random_numbers::InverseCumulativeNormalRng;
use irs_math::{Array, Matrix};

/// The multi-pillar shifted exponential Vasicek process.
///
/// Each pillar `k` carries an Ornstein-Uhlenbeck driver `X_k`, correlated
/// across pillars via a Cholesky factor, started from `X_k(0) = 0` and
/// advanced with the exact (non-Euler) transition density. At grid time
/// `t_i` the driver is mapped onto a rate level via
///
/// ```text
/// Y(t_i,k) = (g(t_i,k) + s_k) * exp(X_k(t_i) - 0.5 * v(t_i,k)) - s_k
/// v(t_i,k) = sigma_k^2 * (1 - exp(-2 * lambda_k * t_i)) / (2 * lambda_k)
/// ```
///
/// `v(t_i,k)` is the variance of `X_k(t_i)` starting from `X_k(0) = 0`, so
/// `E[Y(t_i,k)] = g(t_i,k)` at every grid time, not only asymptotically.
/// `v(0,k) = 0`, so `Y(0,k) = g(0,k)` exactly.
#[derive(Debug, Clone)]
pub struct UltimateBaseCurveProcess {
    params: UltimateBaseCurveParams,
    corr: CorrelationMatrix,
}

impl UltimateBaseCurveProcess {
    /// Build a process from per-pillar parameters and an optional
    /// correlation matrix (defaults to the identity, i.e. independent
    /// pillars, when `None`).
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if a supplied correlation matrix's size does
    /// not match `params.k()`, and propagates `NonSPDCorrelation` from
    /// [`CorrelationMatrix::from_corr`].
    pub fn new(params: UltimateBaseCurveParams, corr: Option<&Matrix>) -> Result<Self> {
        let k = params.k();
        let corr = match corr {
            Some(c) => {
                ensure!(c.rows() == k, ShapeMismatch, "correlation matrix is {}x{} but there are {k} pillars", c.rows(), c.cols());
                CorrelationMatrix::from_corr(c)?
            }
            None => CorrelationMatrix::identity(k),
        };
        Ok(Self { params, corr })
    }

    /// Number of pillars `K`.
    pub fn k(&self) -> Size {
        self.params.k()
    }

    /// Variance of the driver `X_k` at absolute time `t`, started from
    /// `X_k(0) = 0`: `sigma_k^2 * (1 - exp(-2*lambda_k*t)) / (2*lambda_k)`.
    fn driver_variance(&self, kk: Size, t: Real) -> Real {
        let lam = regularise(self.params.lambda()[kk]);
        let sigma = self.params.sigma()[kk];
        sigma * sigma * (1.0 - (-2.0 * lam * t).exp()) / (2.0 * lam)
    }

    /// Simulate `n_paths` scenarios of the rate cube over `time_grid`,
    /// targeting the supplied deterministic mean function.
    ///
    /// `mean_function` must be a `(time_grid.len(), self.k())` matrix, as
    /// produced by [`crate::mean_function::MeanFunctionBuilder::build`].
    /// When `return_driver` is `true`, the underlying `X` driver cube is
    /// also returned (used by diagnostics and by validators that need the
    /// raw Gaussian path rather than the transformed rate).
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if `mean_function`'s shape does not match
    /// `(time_grid.len(), self.k())`.
    pub fn simulate(
        &self,
        time_grid: &TimeGrid,
        mean_function: &Matrix,
        n_paths: Size,
        seed: u64,
        return_driver: bool,
    ) -> Result<(RateCube, Option<DriverCube>)> {
        let k = self.k();
        let t = time_grid.as_slice();
        let tn = t.len();
        ensure!(
            mean_function.rows() == tn && mean_function.cols() == k,
            ShapeMismatch,
            "mean_function is {}x{} but expected {tn}x{k}",
            mean_function.rows(),
            mean_function.cols()
        );

        let l = self.corr.cholesky_factor();
        let mut rate_data = vec![0.0; n_paths * tn * k];
        let mut driver_data = return_driver.then(|| vec![0.0; n_paths * tn * k]);

        for p in 0..n_paths {
            let mut rng = InverseCumulativeNormalRng::new(seed.wrapping_add(p as u64));
            let mut x = vec![0.0; k];

            for i in 0..tn {
                if i > 0 {
                    let dt = t[i] - t[i - 1];
                    let z = Array::from_vec((0..k).map(|_| rng.next_real()).collect());
                    let z_corr = l.mul_vec(&z);
                    for kk in 0..k {
                        let lam = regularise(self.params.lambda()[kk]);
                        let sigma = self.params.sigma()[kk];
                        let decay = (-lam * dt).exp();
                        let step_var = sigma * sigma * (1.0 - (-2.0 * lam * dt).exp()) / (2.0 * lam);
                        x[kk] = decay * x[kk] + step_var.sqrt() * z_corr[kk];
                    }
                }

                for kk in 0..k {
                    let idx = (p * tn + i) * k + kk;
                    if let Some(driver) = driver_data.as_mut() {
                        driver[idx] = x[kk];
                    }
                    let g = mean_function[(i, kk)];
                    let s = self.params.shift()[kk];
                    let v = self.driver_variance(kk, t[i]);
                    rate_data[idx] = (g + s) * (x[kk] - 0.5 * v).exp() - s;
                }
            }
        }

        let rates = RateCube::new(Cube3::from_flat(n_paths, tn, k, rate_data)?);
        let drivers = match driver_data {
            Some(d) => Some(DriverCube::new(Cube3::from_flat(n_paths, tn, k, d)?)),
            None => None,
        };
        Ok((rates, drivers))
    }
}

/// Regularise a mean-reversion speed away from exactly zero, matching the
/// numerical-safety table's `LAMBDA_EPS` floor.
fn regularise(lam: Real) -> Real {
    if lam.abs() < LAMBDA_EPS {
        LAMBDA_EPS
    } else {
        lam
    }
}
