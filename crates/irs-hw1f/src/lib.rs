//! # irs-hw1f
//!
//! The one-factor Hull-White benchmark generator: an independent, classical
//! short-rate model simulated on the same `(P,T,K)` grid as the Ultimate
//! Base Curve process, so the two cubes can be compared pillar for pillar
//! by the validators.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod forward_curve;
pub mod generator;
pub mod required_times;

pub use generator::{HullWhite1FGenerator, HullWhite1FParams};
