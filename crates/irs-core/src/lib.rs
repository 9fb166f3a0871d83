//! # irs-core
//!
//! Core types and the error hierarchy shared across the IR scenario core.
//!
//! This crate provides the type aliases and the structured error enum used
//! by every other crate in the workspace. It carries no numerical logic of
//! its own.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod errors;

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Non-negative integer type.
pub type Natural = u32;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A continuously compounded zero rate, expressed as a decimal (0.02 = 2%).
pub type Rate = Real;

/// A discount factor in (0, 1].
pub type DiscountFactor = Real;

/// A time measurement in years (a year fraction).
pub type Time = Real;

/// A per-pillar shift, basis point or mean-reversion vector indexed by pillar.
pub type Vector = Vec<Real>;

/// Numerical safety constants that must be honoured for parity across
/// implementations (see the core specification's "numerical safety table").
pub mod constants {
    use super::Real;

    /// Floor applied to the deterministic mean function `g(t,k)`.
    pub const DELTA_FLOOR: Real = 1e-8;

    /// Regularisation applied to near-zero mean-reversion speeds.
    pub const LAMBDA_EPS: Real = 1e-14;

    /// Clamp applied to a discount factor before taking its logarithm.
    pub const DF_LOG_CLAMP: Real = 1e-300;

    /// Ridge added to a correlation matrix before Cholesky factorisation.
    pub const CORRELATION_RIDGE: Real = 1e-12;

    /// Threshold ("1 bp" in log-discount-factor units) used by the wedge
    /// validator to flag a dynamic-consistency violation.
    pub const WEDGE_ONE_BP: Real = 1e-4;

    /// Default day-count basis (days per year) used to convert pillar
    /// maturities expressed in days into year fractions.
    pub const DEFAULT_DAY_COUNT: Real = 365.0;
}
