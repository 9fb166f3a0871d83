//! Probability distributions (translates `ql/math/distributions/`).
//!
//! Only the standard normal distribution is needed here: it drives the
//! Gaussian innovations behind the OU drivers and supplies the inverse-CDF
//! transform used by [`crate::random_numbers::InverseCumulativeNormalRng`].

pub mod normal;

pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};
