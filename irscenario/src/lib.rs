//! # irscenario
//!
//! Scenario cubes for interest-rate term structures: the Ultimate Base
//! Curve process, a Hull-White one-factor benchmark, and the arbitrage-free
//! / interpolation / PFE-delta validators that check them.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `irs-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! irscenario = "0.1"
//! ```
//!
//! ```rust
//! use irscenario::core::Real;
//!
//! let rate: Real = 0.05;
//! assert!((rate - 0.05).abs() < f64::EPSILON);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and numerical-safety constants.
pub use irs_core as core;

/// Matrix/array newtypes, Cholesky factorisation, interpolation, RNG, and
/// statistics.
pub use irs_math as math;

/// The simulation time grid, curve pillar set, and `(path, time, pillar)`
/// cube containers.
pub use irs_grids as grids;

/// The `DiscountCurve` capability and its concrete implementations.
pub use irs_curves as curves;

/// The Ultimate Base Curve process: mean function, historical calibrator,
/// and the multi-pillar shifted-exponential Vasicek simulator.
pub use irs_process as process;

/// The Hull-White one-factor benchmark generator.
pub use irs_hw1f as hw1f;

/// Arbitrage-free, interpolation-sensitivity, and PFE-delta validators.
pub use irs_validators as validators;
