//! Curve pillar maturities (no direct Python counterpart; distilled from the
//! `pillars_days` arrays threaded through
//! `xva_engine/simulation/risk_factors/ir/*` and
//! `xva_engine/validation/ir/*`).

use irs_core::{constants::DEFAULT_DAY_COUNT, ensure, errors::Result, Real, Size};

/// A strictly increasing sequence of `K >= 2` pillar maturities, stored in
/// days, with a fixed day-count basis used to convert them to year
/// fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarSet {
    days: Vec<Real>,
    day_count: Real,
}

impl PillarSet {
    /// Build a pillar set from maturities in days, using the default
    /// 365-day year.
    ///
    /// # Errors
    /// Returns `InvalidGrid` if fewer than 2 pillars are given or they are
    /// not strictly increasing.
    pub fn new(days: Vec<Real>) -> Result<Self> {
        Self::with_day_count(days, DEFAULT_DAY_COUNT)
    }

    /// Build a pillar set with an explicit day-count basis (days per year).
    pub fn with_day_count(days: Vec<Real>, day_count: Real) -> Result<Self> {
        ensure!(days.len() >= 2, InvalidGrid, "pillar set needs at least 2 pillars, got {}", days.len());
        ensure!(day_count > 0.0, InvalidGrid, "day count must be positive, got {day_count}");
        for w in days.windows(2) {
            ensure!(
                w[1] > w[0],
                InvalidGrid,
                "pillars must be strictly increasing: {} is not > {}",
                w[1],
                w[0]
            );
        }
        Ok(Self { days, day_count })
    }

    /// Number of pillars, `K`.
    pub fn len(&self) -> Size {
        self.days.len()
    }

    /// `true` if the pillar set has no pillars (never true for a validly
    /// constructed set).
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Day-count basis (days per year) used by [`Self::years`].
    pub fn day_count(&self) -> Real {
        self.day_count
    }

    /// Pillar maturities in days.
    pub fn days(&self) -> &[Real] {
        &self.days
    }

    /// Pillar maturities converted to year fractions `M_k = days_k / D`.
    pub fn years(&self) -> Vec<Real> {
        self.days.iter().map(|&d| d / self.day_count).collect()
    }

    /// A coarse subset formed by keeping every other pillar by index
    /// (stride 2), always including the last pillar.
    ///
    /// Used by the pillar-density-stress validator (§4.G.7).
    pub fn coarse_indices(&self) -> Vec<Size> {
        let n = self.len();
        let mut idx: Vec<Size> = (0..n).step_by(2).collect();
        if *idx.last().unwrap() != n - 1 {
            idx.push(n - 1);
        }
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_and_converts_to_years() {
        let pillars = PillarSet::new(vec![365.0, 730.0, 1825.0]).unwrap();
        let years = pillars.years();
        assert!((years[0] - 1.0).abs() < 1e-12);
        assert!((years[1] - 2.0).abs() < 1e-12);
        assert!((years[2] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_too_few_pillars() {
        assert!(PillarSet::new(vec![365.0]).is_err());
    }

    #[test]
    fn rejects_non_increasing() {
        assert!(PillarSet::new(vec![365.0, 365.0]).is_err());
        assert!(PillarSet::new(vec![730.0, 365.0]).is_err());
    }

    #[test]
    fn coarse_indices_include_last_pillar() {
        // 5 pillars: indices 0,2,4 already include the last (4)
        let p = PillarSet::new(vec![90.0, 180.0, 365.0, 730.0, 1825.0]).unwrap();
        assert_eq!(p.coarse_indices(), vec![0, 2, 4]);

        // 4 pillars: indices 0,2 don't include the last (3), must append it
        let p4 = PillarSet::new(vec![90.0, 180.0, 365.0, 730.0]).unwrap();
        assert_eq!(p4.coarse_indices(), vec![0, 2, 3]);
    }
}
