//! # irs-process
//!
//! The Ultimate Base Curve process: the deterministic mean function, the
//! historical correlation/volatility calibrator, and the multi-pillar
//! shifted-exponential Vasicek simulator itself.
//!
//! Everything here is deterministic given a seed ([`UltimateBaseCurveProcess::simulate`]
//! never reaches for OS entropy): the same `(params, corr, time_grid,
//! mean_function, seed)` always reproduces the same [`irs_grids::RateCube`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod correlation;
pub mod historical_calibrator;
pub mod mean_function;
pub mod process_parameters;
pub mod ultimate_base_curve_process;

pub use correlation::CorrelationMatrix;
pub use historical_calibrator::{estimate_corr_and_sigma, HistoricalCalibConfig};
pub use mean_function::MeanFunctionBuilder;
pub use process_parameters::UltimateBaseCurveParams;
pub use ultimate_base_curve_process::UltimateBaseCurveProcess;
