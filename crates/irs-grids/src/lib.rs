//! # irs-grids
//!
//! The grid primitives shared by every other crate in the workspace:
//! [`TimeGrid`] (the simulation time axis), [`PillarSet`] (curve pillar
//! maturities), and the dense `(path, time, pillar)` cube containers
//! [`RateCube`] and [`DriverCube`] that hold simulation output.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cube;
pub mod pillar_set;
pub mod time_grid;

pub use cube::{Cube3, DriverCube, RateCube};
pub use pillar_set::PillarSet;
pub use time_grid::TimeGrid;
