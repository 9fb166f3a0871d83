//! Simulation time grid (translates `core/time_grid.py`).

use irs_core::{ensure, errors::Result, Size, Time};

/// A strictly increasing sequence of year-fraction time points at which
/// simulation state is stored.
///
/// Every scenario cube indexes its time axis via a `TimeGrid`. Construction
/// validates strict monotonicity; the grid is immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<Time>,
}

impl TimeGrid {
    /// Build a time grid from year fractions `t0 < t1 < ... < t_{n-1}`, with
    /// `t0 >= 0`.
    ///
    /// # Errors
    /// Returns `InvalidGrid` if the grid is empty, not strictly increasing,
    /// or starts below zero.
    pub fn new(times: Vec<Time>) -> Result<Self> {
        ensure!(!times.is_empty(), InvalidGrid, "time grid must not be empty");
        ensure!(times[0] >= 0.0, InvalidGrid, "time grid must start at t >= 0, got {}", times[0]);
        for w in times.windows(2) {
            ensure!(
                w[1] > w[0],
                InvalidGrid,
                "time grid must be strictly increasing: {} is not > {}",
                w[1],
                w[0]
            );
        }
        Ok(Self { times })
    }

    /// Number of time points.
    pub fn len(&self) -> Size {
        self.times.len()
    }

    /// `true` if the grid has no points (never the case for a validly
    /// constructed grid, kept for the standard `is_empty`/`len` pairing).
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Borrow the year-fraction time points.
    pub fn as_slice(&self) -> &[Time] {
        &self.times
    }

    /// The time point at index `i`.
    pub fn get(&self, i: Size) -> Option<Time> {
        self.times.get(i).copied()
    }

    /// The step `t[i+1] - t[i]`, or `None` if `i` is the last index.
    pub fn step(&self, i: Size) -> Option<Time> {
        let a = self.times.get(i)?;
        let b = self.times.get(i + 1)?;
        Some(b - a)
    }

    /// Return the index of the matching time point.
    ///
    /// # Errors
    /// Returns `NotFound` if `t` is not present in the grid (exact match,
    /// mirroring the reference implementation's list-index lookup).
    pub fn index_of(&self, t: Time) -> Result<Size> {
        self.times
            .iter()
            .position(|&ti| ti == t)
            .ok_or_else(|| irs_core::errors::Error::NotFound(format!("time {t} not found in grid")))
    }
}
