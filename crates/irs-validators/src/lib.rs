//! # irs-validators
//!
//! Arbitrage-free and interpolation-sensitivity checks (G.1-G.7) plus a
//! PFE-delta comparator (G.8). Every validator is a pure function of a
//! [`irs_grids::RateCube`] (and, where relevant, a [`irs_grids::PillarSet`]
//! or [`irs_grids::TimeGrid`]): none of them mutate their input, and none of
//! them depend on each other.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dense_grid;
pub mod df_monotonicity;
pub mod df_wedge;
pub mod forward_roughness;
pub mod implied_forward;
pub mod interpolation_sensitivity;
pub mod kink_index;
pub mod maturity;
pub mod numerics;
pub mod pfe_delta;
pub mod pillar_density_stress;

pub use df_monotonicity::DfMonotonicityReport;
pub use df_wedge::DfWedgeReport;
pub use forward_roughness::ForwardRoughnessReport;
pub use implied_forward::ImpliedForwardReport;
pub use interpolation_sensitivity::InterpolationSensitivityReport;
pub use pfe_delta::PfeDeltaReport;
pub use pillar_density_stress::{PillarDensityStressReport, Scheme};
