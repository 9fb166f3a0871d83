//! G.8 PFE delta: compares two `(P,T)` exposure profiles at a fixed
//! quantile (translates `xva_engine/validation/pfe/pfe_delta.py`).

use irs_core::{ensure, errors::Result, Real};
use irs_math::statistics::quantile;

/// Guard against division by a near-zero denominator when forming relative
/// differences, matching the reference implementation's `max(|b|, 1e-12)`.
pub const MAX_DENOMINATOR_GUARD: Real = 1e-12;

/// Per-time PFE profiles, their difference, and summary scalars.
#[derive(Debug, Clone)]
pub struct PfeDeltaReport {
    /// `PFE_a(t) = quantile_q(a(:,t))`.
    pub pfe_a: Vec<Real>,
    /// `PFE_b(t) = quantile_q(b(:,t))`.
    pub pfe_b: Vec<Real>,
    /// `delta(t) = PFE_a(t) - PFE_b(t)`.
    pub delta: Vec<Real>,
    /// `rel_delta(t) = delta(t) / max(|PFE_b(t)|, 1e-12)`.
    pub rel_delta: Vec<Real>,
    /// `max_t |delta(t)|`.
    pub max_abs_delta: Real,
    /// `max_t |rel_delta(t)|`.
    pub max_rel_delta: Real,
}

/// Compare the quantile-`q` exposure profile of two `(P,T)` exposure
/// matrices, given in row-major `path * t_n + t` layout.
///
/// # Errors
/// Returns `ShapeMismatch` if `a` and `b` disagree in shape.
pub fn check(a: &[Real], b: &[Real], p_n: usize, t_n: usize, q: Real) -> Result<PfeDeltaReport> {
    ensure!(
        a.len() == p_n * t_n && b.len() == p_n * t_n,
        ShapeMismatch,
        "expected {} values for a ({}x{}) and b, got a={}, b={}",
        p_n * t_n,
        p_n,
        t_n,
        a.len(),
        b.len()
    );

    let pfe_of = |x: &[Real]| -> Vec<Real> {
        (0..t_n)
            .map(|t| {
                let col: Vec<Real> = (0..p_n).map(|p| x[p * t_n + t]).collect();
                quantile(&col, q).unwrap_or(0.0)
            })
            .collect()
    };

    let pfe_a = pfe_of(a);
    let pfe_b = pfe_of(b);
    let delta: Vec<Real> = pfe_a.iter().zip(pfe_b.iter()).map(|(&x, &y)| x - y).collect();
    let rel_delta: Vec<Real> = delta
        .iter()
        .zip(pfe_b.iter())
        .map(|(&d, &b)| d / b.abs().max(MAX_DENOMINATOR_GUARD))
        .collect();

    let max_abs_delta = delta.iter().fold(0.0_f64, |acc, &d| acc.max(d.abs()));
    let max_rel_delta = rel_delta.iter().fold(0.0_f64, |acc, &r| acc.max(r.abs()));

    Ok(PfeDeltaReport { pfe_a, pfe_b, delta, rel_delta, max_abs_delta, max_rel_delta })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_profiles_have_zero_delta() {
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let report = check(&a, &a, 3, 2, 0.95).unwrap();
        for &d in &report.delta {
            assert_eq!(d, 0.0);
        }
        assert_eq!(report.max_abs_delta, 0.0);
    }

    #[test]
    fn near_zero_denominator_is_guarded() {
        // b is identically zero at every path and time: rel_delta must use
        // the 1e-12 floor rather than dividing by zero.
        let a = vec![1e-6; 4];
        let b = vec![0.0; 4];
        let report = check(&a, &b, 2, 2, 0.5).unwrap();
        assert!(report.max_rel_delta.is_finite());
    }

    #[test]
    fn rejects_mismatched_shapes() {
        let a = vec![1.0; 4];
        let b = vec![1.0; 6];
        assert!(check(&a, &b, 2, 2, 0.5).is_err());
    }
}
