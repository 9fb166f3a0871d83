//! G.1 discount-factor monotonicity (translates
//! `xva_engine/validation/ir/arbitrage_free/metrics.py::df_monotonicity_violations`).

use irs_core::Real;
use irs_grids::{PillarSet, RateCube};

/// Result of the discount-factor monotonicity check.
#[derive(Debug, Clone)]
pub struct DfMonotonicityReport {
    /// Fraction of `(p,i,k)` with `DF(k+1) - DF(k) > tol`.
    pub violation_rate: Real,
    /// Largest positive `DF(k+1) - DF(k)` found, or `0.0` if none.
    pub max_increase: Real,
    /// `(T, K-1)` violation frequency, averaged over paths.
    pub freq_time_pillar: Vec<Vec<Real>>,
}

/// Check that `DF(p,i,k) = exp(-Y(p,i,k)*M_k)` is non-increasing in `k`,
/// for every path and time.
pub fn check(cube: &RateCube, pillars: &PillarSet, tol: Real) -> DfMonotonicityReport {
    let (p_n, t_n, k_n) = cube.shape();
    let m = pillars.years();

    let mut total = 0usize;
    let mut violations = 0usize;
    let mut max_increase: Real = 0.0;
    let mut freq_time_pillar = vec![vec![0.0; k_n - 1]; t_n];

    for i in 0..t_n {
        for k in 0..k_n - 1 {
            let mut hits = 0usize;
            for p in 0..p_n {
                let df_k = (-cube.get(p, i, k) * m[k]).exp();
                let df_k1 = (-cube.get(p, i, k + 1) * m[k + 1]).exp();
                let diff = df_k1 - df_k;
                total += 1;
                if diff > tol {
                    violations += 1;
                    hits += 1;
                    if diff > max_increase {
                        max_increase = diff;
                    }
                }
            }
            freq_time_pillar[i][k] = hits as Real / p_n as Real;
        }
    }

    DfMonotonicityReport {
        violation_rate: violations as Real / total as Real,
        max_increase,
        freq_time_pillar,
    }
}
