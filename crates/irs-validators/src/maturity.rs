//! Linear interpolation of a per-pillar row in maturity space, flat outside
//! the pillar range (`numpy.interp`'s default clamping).

use irs_core::Real;

/// Interpolate `ys` sampled at strictly increasing `xs` onto `target`,
/// clamping to the boundary value outside `[xs[0], xs[-1]]`.
pub fn interp_flat_at(xs: &[Real], ys: &[Real], target: Real) -> Real {
    let n = xs.len();
    if target <= xs[0] {
        return ys[0];
    }
    if target >= xs[n - 1] {
        return ys[n - 1];
    }
    let i = match xs.binary_search_by(|probe| probe.partial_cmp(&target).unwrap()) {
        Ok(i) => return ys[i],
        Err(i) => i,
    };
    let (x0, x1) = (xs[i - 1], xs[i]);
    let (y0, y1) = (ys[i - 1], ys[i]);
    y0 + (y1 - y0) * (target - x0) / (x1 - x0)
}

/// Interpolate `ys` onto every point of `targets`.
pub fn interp_flat_row(xs: &[Real], ys: &[Real], targets: &[Real]) -> Vec<Real> {
    targets.iter().map(|&t| interp_flat_at(xs, ys, t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_outside_pillar_range() {
        let xs = [1.0, 2.0, 5.0];
        let ys = [0.01, 0.02, 0.03];
        assert_eq!(interp_flat_at(&xs, &ys, 0.1), 0.01);
        assert_eq!(interp_flat_at(&xs, &ys, 10.0), 0.03);
    }

    #[test]
    fn linear_between_nodes() {
        let xs = [1.0, 3.0];
        let ys = [0.0, 2.0];
        assert!((interp_flat_at(&xs, &ys, 2.0) - 1.0).abs() < 1e-12);
    }
}
