//! Builds the dense "required times" axis the generator actually simulates
//! the discount-factor path on: the union of the simulation time grid and
//! every `t_i + M_k` pillar-forward time, sorted and deduplicated.

use irs_core::{Real, Size};
use irs_grids::{PillarSet, TimeGrid};

/// `sort_unique( TimeGrid ∪ { t_i + M_k : i, k } )`, restricted to `>= 0`.
///
/// Returns the merged axis together with the indices of `time_grid`'s own
/// points and of each `(i, k)` pillar-forward time within it, so callers
/// can look discount factors back up by position instead of re-searching.
pub fn build(time_grid: &TimeGrid, pillars: &PillarSet) -> RequiredTimes {
    let t = time_grid.as_slice();
    let m = pillars.years();

    let mut all: Vec<Real> = t.to_vec();
    for &ti in t {
        for &mk in &m {
            all.push(ti + mk);
        }
    }
    all.retain(|&u| u >= 0.0);
    all.sort_by(|a, b| a.partial_cmp(b).expect("NaN in required-times input"));
    all.dedup_by(|a, b| a == b);

    let idx_t: Vec<Size> = t.iter().map(|&ti| locate_exact(&all, ti)).collect();
    let idx_tm: Vec<Vec<Size>> = t
        .iter()
        .map(|&ti| m.iter().map(|&mk| locate_exact(&all, ti + mk)).collect())
        .collect();

    RequiredTimes { times: all, idx_t, idx_tm }
}

/// The merged axis and the index maps back onto `(i)` and `(i, k)`.
pub struct RequiredTimes {
    /// The merged, strictly increasing time axis.
    pub times: Vec<Real>,
    /// `idx_t[i]` is the position of `time_grid[i]` within `times`.
    pub idx_t: Vec<Size>,
    /// `idx_tm[i][k]` is the position of `time_grid[i] + pillar_years[k]`
    /// within `times`.
    pub idx_tm: Vec<Vec<Size>>,
}

fn locate_exact(sorted: &[Real], value: Real) -> Size {
    sorted
        .binary_search_by(|probe| probe.partial_cmp(&value).expect("NaN in required-times axis"))
        .expect("value was inserted into the axis by construction")
}
