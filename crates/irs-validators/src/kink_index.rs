//! G.3 kink index: second finite difference along the pillar axis
//! (translates `xva_engine/validation/ir/arbitrage_free/metrics.py::kink_index`).

use irs_core::{ensure, errors::Result, Real};
use irs_grids::RateCube;

/// `max_k |Y(k+2) - 2*Y(k+1) + Y(k)|`, returned as a `(P,T)` grid.
///
/// # Errors
/// Returns `ShapeMismatch` if the cube has fewer than 3 pillars.
pub fn check(cube: &RateCube) -> Result<Vec<Vec<Real>>> {
    let (p_n, t_n, k_n) = cube.shape();
    ensure!(k_n >= 3, ShapeMismatch, "kink index needs at least 3 pillars, got {k_n}");

    let mut out = vec![vec![0.0; t_n]; p_n];
    for p in 0..p_n {
        for t in 0..t_n {
            let mut max_abs: Real = 0.0;
            for k in 0..k_n - 2 {
                let d2 = cube.get(p, t, k + 2) - 2.0 * cube.get(p, t, k + 1) + cube.get(p, t, k);
                if d2.abs() > max_abs {
                    max_abs = d2.abs();
                }
            }
            out[p][t] = max_abs;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use irs_grids::Cube3;

    #[test]
    fn linear_curve_has_zero_kink() {
        let cube = RateCube::new(Cube3::from_flat(1, 1, 4, vec![0.01, 0.02, 0.03, 0.04]).unwrap());
        let kink = check(&cube).unwrap();
        assert!(kink[0][0].abs() < 1e-12);
    }

    #[test]
    fn a_single_spike_is_detected() {
        let cube = RateCube::new(Cube3::from_flat(1, 1, 4, vec![0.01, 0.10, 0.02, 0.03]).unwrap());
        let kink = check(&cube).unwrap();
        assert!(kink[0][0] > 0.05);
    }

    #[test]
    fn rejects_too_few_pillars() {
        let cube = RateCube::new(Cube3::from_flat(1, 1, 2, vec![0.01, 0.02]).unwrap());
        assert!(check(&cube).is_err());
    }
}
