//! Error types for the IR scenario core.
//!
//! This module defines a single `thiserror`-derived enum covering every
//! failure mode named by the core's error-handling design (see §7 of the
//! specification this crate implements). Numerical guards — clamping a
//! discount factor before taking its logarithm, the correlation ridge, the
//! epsilon floor on mean-reversion speeds — are deliberately silent and do
//! not appear here; they protect valid inputs and never mask a wrong one.

use thiserror::Error;

/// The error type used throughout the IR scenario core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Array dimensions disagree with the required `(T,K)` or `(P,T,K)` shape.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A time grid or pillar set is not strictly increasing, or is too short.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// A discount curve is non-positive where a logarithm is required.
    #[error("invalid curve: {0}")]
    InvalidCurve(String),

    /// `rate + shift <= 0` while computing shifted log-returns in historical
    /// calibration.
    #[error("non-positive shift: {0}")]
    NonPositiveShift(String),

    /// Cholesky factorisation failed even after the correlation ridge.
    #[error("correlation matrix is not positive semi-definite: {0}")]
    NonSPDCorrelation(String),

    /// The one-step discount-factor wedge validator was configured with
    /// `u <= 0` or `u >= T_long`.
    #[error("bad wedge configuration: {0}")]
    BadWedgeConfiguration(String),

    /// A grid-index lookup did not find the requested value.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Shorthand `Result` type used throughout the IR scenario core.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::$variant(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use irs_core::{ensure, errors::Error};
/// fn index_of(i: usize, len: usize) -> irs_core::errors::Result<usize> {
///     ensure!(i < len, NotFound, "index {i} out of range [0, {len})");
///     Ok(i)
/// }
/// assert!(index_of(1, 3).is_ok());
/// assert!(index_of(3, 3).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$variant(format!($($msg)*)));
        }
    };
}
