//! 1D interpolation traits and implementations (translates
//! `ql/math/interpolation.hpp` and `ql/math/interpolations/`).
//!
//! **1D interpolations:** Linear, LogLinear, Flat (backward), ForwardFlat,
//! CubicNaturalSpline, Lagrange. These cover the zero-linear and logdf-linear
//! schemes compared by the interpolation-sensitivity validator, plus the
//! curve reconstructions used elsewhere in the scenario core.

use irs_core::{errors::Result, Real};

/// A 1D interpolation function `f: R → R` defined by a set of known points.
///
/// Corresponds to `QuantLib::Interpolation`.
pub trait Interpolation1D: std::fmt::Debug + Send + Sync {
    /// Evaluate the interpolation at `x`.
    fn operator(&self, x: Real) -> Real;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

// ── Linear ────────────────────────────────────────────────────────────────────

/// Linear interpolation.
///
/// `f(x) = y[i] + (y[i+1] - y[i]) * (x - x[i]) / (x[i+1] - x[i])`
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl LinearInterpolation {
    /// Construct a linear interpolation from sorted `xs` and corresponding `ys`.
    ///
    /// # Errors
    /// Returns an error if the slices have different lengths or fewer than 2 points.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        irs_core::ensure!(xs.len() >= 2, InvalidGrid, "need at least 2 points for interpolation");
        irs_core::ensure!(xs.len() == ys.len(), InvalidGrid, "xs and ys must have the same length");
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    fn locate(&self, x: Real) -> usize {
        // Binary search for the interval containing x
        let n = self.xs.len();
        if x <= self.xs[0] {
            return 0;
        }
        if x >= self.xs[n - 1] {
            return n - 2;
        }
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] <= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

impl Interpolation1D for LinearInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().unwrap()
    }

    fn operator(&self, x: Real) -> Real {
        let i = self.locate(x);
        let dx = self.xs[i + 1] - self.xs[i];
        if dx.abs() < f64::EPSILON {
            return self.ys[i];
        }
        self.ys[i] + (x - self.xs[i]) * (self.ys[i + 1] - self.ys[i]) / dx
    }
}

// ── Log-linear ────────────────────────────────────────────────────────────────

/// Log-linear interpolation.
///
/// Interpolates `log(y)` linearly and exponentiates the result.
#[derive(Debug, Clone)]
pub struct LogLinearInterpolation {
    inner: LinearInterpolation,
}

impl LogLinearInterpolation {
    /// Construct a log-linear interpolation.
    ///
    /// All `ys` values must be strictly positive.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        irs_core::ensure!(ys.iter().all(|&y| y > 0.0), InvalidGrid, "all y values must be positive for log-linear interpolation");
        let log_ys: Vec<Real> = ys.iter().map(|&y| y.ln()).collect();
        Ok(Self {
            inner: LinearInterpolation::new(xs, &log_ys)?,
        })
    }
}

impl Interpolation1D for LogLinearInterpolation {
    fn x_min(&self) -> Real {
        self.inner.x_min()
    }

    fn x_max(&self) -> Real {
        self.inner.x_max()
    }

    fn operator(&self, x: Real) -> Real {
        self.inner.operator(x).exp()
    }
}

// ── Flat (constant / nearest-neighbour) ──────────────────────────────────────

/// Flat (step-function) interpolation — uses the value at the lower node.
#[derive(Debug, Clone)]
pub struct FlatInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl FlatInterpolation {
    /// Construct a flat interpolation.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        irs_core::ensure!(!xs.is_empty(), InvalidGrid, "need at least 1 point");
        irs_core::ensure!(xs.len() == ys.len(), InvalidGrid, "xs and ys lengths must match");
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }
}

impl Interpolation1D for FlatInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().unwrap()
    }

    fn operator(&self, x: Real) -> Real {
        if x <= self.xs[0] {
            return self.ys[0];
        }
        // Return the value at the last node with xs[i] <= x
        let n = self.xs.len();
        for i in (0..n).rev() {
            if self.xs[i] <= x {
                return self.ys[i];
            }
        }
        self.ys[0]
    }
}

// ── Forward Flat ──────────────────────────────────────────────────────────────

/// Forward flat interpolation — uses the value at the upper node.
///
/// Corresponds to `QuantLib::ForwardFlatInterpolation`.
#[derive(Debug, Clone)]
pub struct ForwardFlatInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl ForwardFlatInterpolation {
    /// Construct a forward flat interpolation.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        irs_core::ensure!(!xs.is_empty(), InvalidGrid, "need at least 1 point");
        irs_core::ensure!(xs.len() == ys.len(), InvalidGrid, "xs and ys lengths must match");
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }
}

impl Interpolation1D for ForwardFlatInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().unwrap()
    }

    fn operator(&self, x: Real) -> Real {
        let n = self.xs.len();
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }
        // Find interval i such that xs[i] <= x < xs[i+1], return ys[i].
        // This matches C++ `ForwardFlatInterpolation`: yBegin_[locate(x)].
        let i = match self.xs.partition_point(|&xi| xi <= x) {
            0 => 0,
            p => p - 1,
        };
        self.ys[i]
    }
}

// ── Cubic Natural Spline ─────────────────────────────────────────────────────

/// Natural cubic spline interpolation (second derivatives vanish at endpoints).
///
/// Corresponds to `QuantLib::CubicInterpolation` with `Natural` boundary
/// conditions.
#[derive(Debug, Clone)]
pub struct CubicNaturalSpline {
    xs: Vec<Real>,
    ys: Vec<Real>,
    /// Second derivatives at the knots.
    m: Vec<Real>,
}

impl CubicNaturalSpline {
    /// Build a natural cubic spline through `(xs[i], ys[i])`.
    ///
    /// The xs must be sorted in strictly increasing order.
    ///
    /// # Errors
    /// Returns an error if fewer than 3 points are provided or lengths differ.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        irs_core::ensure!(xs.len() >= 3, InvalidGrid, "need at least 3 points for cubic spline");
        irs_core::ensure!(xs.len() == ys.len(), InvalidGrid, "xs and ys must have the same length");
        let n = xs.len();
        let m = Self::compute_second_derivatives(xs, ys, n);
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m,
        })
    }

    /// Solve the tridiagonal system for natural spline second-derivatives.
    fn compute_second_derivatives(xs: &[Real], ys: &[Real], n: usize) -> Vec<Real> {
        let nm1 = n - 1;

        // h[i] = xs[i+1] - xs[i]
        let h: Vec<Real> = (0..nm1).map(|i| xs[i + 1] - xs[i]).collect();

        // RHS of the tridiagonal system
        let mut rhs = vec![0.0; n];
        for i in 1..nm1 {
            rhs[i] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
        }

        // Natural boundary: m[0] = m[n-1] = 0
        // Tridiagonal system: h[i-1]*m[i-1] + 2*(h[i-1]+h[i])*m[i] + h[i]*m[i+1] = rhs[i]
        // Solve using Thomas algorithm for i = 1..n-2

        let mut c_prime = vec![0.0; n];
        let mut d_prime = vec![0.0; n];

        // Forward sweep
        for i in 1..nm1 {
            let diag = 2.0 * (h[i - 1] + h[i]);
            let sub = h[i - 1];
            let sup = h[i];

            let denom = diag - sub * c_prime[i - 1];
            c_prime[i] = sup / denom;
            d_prime[i] = (rhs[i] - sub * d_prime[i - 1]) / denom;
        }

        // Back substitution
        let mut m = vec![0.0; n];
        for i in (1..nm1).rev() {
            m[i] = d_prime[i] - c_prime[i] * m[i + 1];
        }

        m
    }

    fn locate(&self, x: Real) -> usize {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return 0;
        }
        if x >= self.xs[n - 1] {
            return n - 2;
        }
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] <= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

impl Interpolation1D for CubicNaturalSpline {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().unwrap()
    }

    fn operator(&self, x: Real) -> Real {
        let i = self.locate(x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = x - self.xs[i];
        let a = (self.m[i + 1] - self.m[i]) / (6.0 * h);
        let b = self.m[i] / 2.0;
        let c = (self.ys[i + 1] - self.ys[i]) / h - h * (2.0 * self.m[i] + self.m[i + 1]) / 6.0;
        let d = self.ys[i];
        d + t * (c + t * (b + t * a))
    }
}

// ── Lagrange Interpolation ───────────────────────────────────────────────────

/// Lagrange polynomial interpolation.
///
/// Corresponds to `QuantLib::LagrangeInterpolation`.
/// Uses the barycentric formula for numerical stability.
#[derive(Debug, Clone)]
pub struct LagrangeInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
    weights: Vec<Real>,
}

impl LagrangeInterpolation {
    /// Build a Lagrange interpolation through `(xs[i], ys[i])`.
    ///
    /// # Errors
    /// Returns an error if fewer than 2 points or lengths differ.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        irs_core::ensure!(xs.len() >= 2, InvalidGrid, "need at least 2 points");
        irs_core::ensure!(xs.len() == ys.len(), InvalidGrid, "xs and ys must have the same length");
        let n = xs.len();
        // Barycentric weights: w[j] = 1 / prod_{k≠j} (x[j] - x[k])
        let mut weights = vec![1.0; n];
        for j in 0..n {
            for k in 0..n {
                if k != j {
                    weights[j] /= xs[j] - xs[k];
                }
            }
        }
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            weights,
        })
    }
}

impl Interpolation1D for LagrangeInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().unwrap()
    }

    fn operator(&self, x: Real) -> Real {
        // Check if x coincides with a node
        for (i, &xi) in self.xs.iter().enumerate() {
            if (x - xi).abs() < f64::EPSILON * (1.0 + x.abs()) {
                return self.ys[i];
            }
        }
        // Barycentric formula: f(x) = [Σ w_j * y_j / (x - x_j)] / [Σ w_j / (x - x_j)]
        let mut numer = 0.0;
        let mut denom = 0.0;
        for j in 0..self.xs.len() {
            let t = self.weights[j] / (x - self.xs[j]);
            numer += t * self.ys[j];
            denom += t;
        }
        numer / denom
    }
}
