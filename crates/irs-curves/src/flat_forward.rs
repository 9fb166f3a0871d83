//! Constant continuously-compounded forward rate curve.

use crate::DiscountCurve;
use irs_core::{DiscountFactor, Rate, Time};

/// `DF(0, t) = exp(-r * t)` for a constant rate `r`.
///
/// The simplest discount curve, used throughout the specification's
/// end-to-end scenarios (e.g. `DF(0,t) = e^{-0.02 t}`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatForwardCurve {
    rate: Rate,
}

impl FlatForwardCurve {
    /// Construct a flat curve at the given continuously-compounded rate.
    pub fn new(rate: Rate) -> Self {
        Self { rate }
    }

    /// The constant rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl DiscountCurve for FlatForwardCurve {
    fn discount(&self, t: Time) -> DiscountFactor {
        (-self.rate * t).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_at_zero_is_one() {
        let curve = FlatForwardCurve::new(0.02);
        assert!((curve.discount(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn matches_exponential_formula() {
        let curve = FlatForwardCurve::new(0.02);
        let expected = (-0.02_f64 * 5.0).exp();
        assert!((curve.discount(5.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn is_monotonically_decreasing() {
        let curve = FlatForwardCurve::new(0.03);
        assert!(curve.discount(2.0) < curve.discount(1.0));
    }
}
