//! # irs-curves
//!
//! The `DiscountCurve` capability — the only way the rest of the scenario
//! core observes an initial term structure — plus two concrete
//! implementations: a constant-rate [`FlatForwardCurve`] and a
//! piecewise-linear [`InterpolatedDiscountCurve`] built from a zero-rate
//! table (translates the `zero_rate`/`df` pair on
//! `market_data/objects/yield_curve.py`'s `YieldCurve`).
//!
//! There is deliberately no `Date`/`Calendar` concept here: the core works
//! entirely in year fractions relative to an implicit valuation date, per
//! the specification's discount-curve interface (`DF(t) -> positive real
//! for t >= 0`).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod flat_forward;
pub mod interpolated_discount_curve;

use irs_core::{DiscountFactor, Time};

/// A single capability: supply `DF(0, t)` for any `t >= 0`.
///
/// The core never requires derivatives of the curve; wherever roughness or
/// sensitivity needs a slope, it is taken numerically from sampled `DF`
/// values (see `irs-validators`).
pub trait DiscountCurve: Send + Sync {
    /// The discount factor from time `0` to time `t`.
    fn discount(&self, t: Time) -> DiscountFactor;
}

// A curve behind a shared or boxed pointer is itself a curve.
impl<C: DiscountCurve + ?Sized> DiscountCurve for std::sync::Arc<C> {
    fn discount(&self, t: Time) -> DiscountFactor {
        (**self).discount(t)
    }
}

pub use flat_forward::FlatForwardCurve;
pub use interpolated_discount_curve::InterpolatedDiscountCurve;
