//! G.2 implied forward sanity (translates
//! `xva_engine/validation/ir/arbitrage_free/test_forward_reconstruction.py`).

use irs_core::{ensure, errors::Result, Real, Size};
use irs_grids::{PillarSet, RateCube};
use irs_math::statistics::quantile;

/// Sample statistics of the simple implied forward between two pillars,
/// taken across every `(path, time)`.
#[derive(Debug, Clone)]
pub struct ImpliedForwardReport {
    /// Sample mean of `F_ij` across all `(p,t)`.
    pub mean: Real,
    /// Sample standard deviation (population, matching `numpy.std`).
    pub std: Real,
    /// 5th percentile.
    pub p05: Real,
    /// 95th percentile.
    pub p95: Real,
}

/// `F_ij(p,t) = (Y_j*M_j - Y_i*M_i) / (M_j - M_i)` for pillars `i < j`.
///
/// # Errors
/// Returns `ShapeMismatch` if `i >= j` or either index is out of range.
pub fn check(cube: &RateCube, pillars: &PillarSet, i: Size, j: Size) -> Result<ImpliedForwardReport> {
    let (p_n, t_n, k_n) = cube.shape();
    ensure!(i < j && j < k_n, ShapeMismatch, "need i < j < K, got i={i}, j={j}, K={k_n}");
    let m = pillars.years();
    let (m_i, m_j) = (m[i], m[j]);

    let mut fwd = Vec::with_capacity(p_n * t_n);
    for p in 0..p_n {
        for t in 0..t_n {
            let y_i = cube.get(p, t, i);
            let y_j = cube.get(p, t, j);
            fwd.push((y_j * m_j - y_i * m_i) / (m_j - m_i));
        }
    }

    let n = fwd.len() as Real;
    let mean = fwd.iter().sum::<Real>() / n;
    let var = fwd.iter().map(|&f| (f - mean).powi(2)).sum::<Real>() / n;
    let std = var.sqrt();
    let p05 = quantile(&fwd, 0.05).unwrap_or(mean);
    let p95 = quantile(&fwd, 0.95).unwrap_or(mean);

    Ok(ImpliedForwardReport { mean, std, p05, p95 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use irs_grids::Cube3;

    #[test]
    fn flat_curve_has_forward_equal_to_rate() {
        let pillars = PillarSet::new(vec![365.0, 730.0]).unwrap();
        let data = vec![0.02, 0.02, 0.02, 0.02];
        let cube = RateCube::new(Cube3::from_flat(2, 1, 2, data).unwrap());
        let report = check(&cube, &pillars, 0, 1).unwrap();
        assert!((report.mean - 0.02).abs() < 1e-12);
        assert!(report.std < 1e-12);
    }

    #[test]
    fn rejects_bad_index_order() {
        let pillars = PillarSet::new(vec![365.0, 730.0]).unwrap();
        let cube = RateCube::new(Cube3::from_flat(1, 1, 2, vec![0.02, 0.02]).unwrap());
        assert!(check(&cube, &pillars, 1, 0).is_err());
    }
}
