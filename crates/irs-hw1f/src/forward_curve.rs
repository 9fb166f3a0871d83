//! Flat-extrapolating linear interpolation and a non-uniform-grid numerical
//! gradient, matching `numpy.interp` and `numpy.gradient(..., edge_order=1)`
//! respectively — the two numerical primitives the benchmark's initial
//! instantaneous-forward construction is built from.

use irs_core::{constants::DF_LOG_CLAMP, Real};

/// Linearly interpolate `y` sampled at strictly increasing `x` onto each
/// point of `xq`, clamping to the boundary value outside `[x[0], x[-1]]`
/// (i.e. `numpy.interp`'s default flat extrapolation — deliberately
/// distinct from [`irs_curves::InterpolatedDiscountCurve`]'s linear
/// extrapolation, since this is the convention the reference benchmark
/// actually resamples its initial curve with).
pub fn interp_flat(x: &[Real], y: &[Real], xq: &[Real]) -> Vec<Real> {
    xq.iter().map(|&q| interp_flat_scalar(x, y, q)).collect()
}

fn interp_flat_scalar(x: &[Real], y: &[Real], q: Real) -> Real {
    let n = x.len();
    if q <= x[0] {
        return y[0];
    }
    if q >= x[n - 1] {
        return y[n - 1];
    }
    let i = match x.binary_search_by(|probe| probe.partial_cmp(&q).unwrap()) {
        Ok(i) => return y[i],
        Err(i) => i,
    };
    let (x0, x1) = (x[i - 1], x[i]);
    let (y0, y1) = (y[i - 1], y[i]);
    y0 + (y1 - y0) * (q - x0) / (x1 - x0)
}

/// `ln(DF)` with the numerical-safety-table clamp applied before the
/// logarithm.
pub fn clamped_ln(df: Real) -> Real {
    df.max(DF_LOG_CLAMP).ln()
}

/// First derivative of `y(x)` by central differences on a possibly
/// non-uniform grid, with one-sided differences at the two endpoints
/// (`numpy.gradient(y, x, edge_order=1)`).
///
/// # Panics
/// Panics if `x.len() != y.len()` or `x.len() < 2` — both are programmer
/// errors at the call sites in this crate, never a function of external
/// input.
pub fn gradient_edge_order1(x: &[Real], y: &[Real]) -> Vec<Real> {
    let n = x.len();
    assert_eq!(x.len(), y.len());
    assert!(n >= 2, "gradient needs at least 2 points");

    let mut d = vec![0.0; n];
    d[0] = (y[1] - y[0]) / (x[1] - x[0]);
    d[n - 1] = (y[n - 1] - y[n - 2]) / (x[n - 1] - x[n - 2]);
    for i in 1..n - 1 {
        let hs = x[i] - x[i - 1];
        let hd = x[i + 1] - x[i];
        let hs2 = hs * hs;
        let hd2 = hd * hd;
        d[i] = (hs2 * y[i + 1] + (hd2 - hs2) * y[i] - hd2 * y[i - 1]) / (hs * hd * (hd + hs));
    }
    d
}
