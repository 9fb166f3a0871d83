//! Dense (path, time, pillar) tensors (translates
//! `xva_engine/simulation/scenario_cube.py`).

use irs_core::{ensure, errors::Result, Real, Size};

/// A dense `(P, T, K)` real tensor, stored row-major with the pillar axis
/// fastest-varying so that `row(p, i)` — the full pillar vector at a given
/// path and time — is a contiguous slice.
///
/// `RateCube` holds simulated continuously-compounded zero rates
/// `Y(p, i, k)`; `DriverCube` holds the underlying OU driver state
/// `X(p, i, k)`. Both share this representation. A cube is immutable once
/// built; nothing downstream, in particular no validator, ever mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube3 {
    data: Vec<Real>,
    p: Size,
    t: Size,
    k: Size,
}

impl Cube3 {
    /// Build a cube from a flat row-major buffer of length `p * t * k`.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if `data.len() != p * t * k`.
    pub fn from_flat(p: Size, t: Size, k: Size, data: Vec<Real>) -> Result<Self> {
        ensure!(
            data.len() == p * t * k,
            ShapeMismatch,
            "cube data has {} elements, expected {p}*{t}*{k}={}",
            data.len(),
            p * t * k
        );
        Ok(Self { data, p, t, k })
    }

    /// Build a cube by evaluating `f(path, time_index, pillar_index)` at
    /// every coordinate.
    pub fn from_fn(p: Size, t: Size, k: Size, mut f: impl FnMut(Size, Size, Size) -> Real) -> Self {
        let mut data = Vec::with_capacity(p * t * k);
        for pi in 0..p {
            for ti in 0..t {
                for ki in 0..k {
                    data.push(f(pi, ti, ki));
                }
            }
        }
        Self { data, p, t, k }
    }

    /// Shape `(P, T, K)`.
    pub fn shape(&self) -> (Size, Size, Size) {
        (self.p, self.t, self.k)
    }

    #[inline]
    fn offset(&self, p: Size, i: Size, k: Size) -> Size {
        (p * self.t + i) * self.k + k
    }

    /// Value at `(path, time_index, pillar_index)`.
    pub fn get(&self, p: Size, i: Size, k: Size) -> Real {
        self.data[self.offset(p, i, k)]
    }

    /// The full pillar vector at a given path and time index; contiguous by
    /// construction.
    pub fn row(&self, p: Size, i: Size) -> &[Real] {
        let start = self.offset(p, i, 0);
        &self.data[start..start + self.k]
    }

    /// All values at a fixed time and pillar index, across paths.
    pub fn column_over_paths(&self, i: Size, k: Size) -> Vec<Real> {
        (0..self.p).map(|p| self.get(p, i, k)).collect()
    }

    /// The raw row-major backing buffer.
    pub fn as_flat(&self) -> &[Real] {
        &self.data
    }
}

/// Simulated continuously-compounded zero rates `Y(p, i, k)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RateCube(pub Cube3);

impl RateCube {
    /// Wrap a raw cube as a rate cube.
    pub fn new(cube: Cube3) -> Self {
        Self(cube)
    }

    /// Shape `(P, T, K)`.
    pub fn shape(&self) -> (Size, Size, Size) {
        self.0.shape()
    }

    /// Value at `(path, time_index, pillar_index)`.
    pub fn get(&self, p: Size, i: Size, k: Size) -> Real {
        self.0.get(p, i, k)
    }

    /// The full pillar vector at a given path and time index.
    pub fn row(&self, p: Size, i: Size) -> &[Real] {
        self.0.row(p, i)
    }
}

/// The underlying OU driver state `X(p, i, k)`, materialised only on
/// request alongside a [`RateCube`].
#[derive(Debug, Clone, PartialEq)]
pub struct DriverCube(pub Cube3);

impl DriverCube {
    /// Wrap a raw cube as a driver cube.
    pub fn new(cube: Cube3) -> Self {
        Self(cube)
    }

    /// Shape `(P, T, K)`.
    pub fn shape(&self) -> (Size, Size, Size) {
        self.0.shape()
    }

    /// Value at `(path, time_index, pillar_index)`.
    pub fn get(&self, p: Size, i: Size, k: Size) -> Real {
        self.0.get(p, i, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_checks_shape() {
        let ok = Cube3::from_flat(2, 3, 4, vec![0.0; 24]);
        assert!(ok.is_ok());
        let bad = Cube3::from_flat(2, 3, 4, vec![0.0; 23]);
        assert!(bad.is_err());
    }

    #[test]
    fn from_fn_and_row_are_consistent() {
        let cube = Cube3::from_fn(2, 3, 4, |p, i, k| (p * 100 + i * 10 + k) as Real);
        assert_eq!(cube.shape(), (2, 3, 4));
        assert_eq!(cube.get(1, 2, 3), 123.0);
        let row = cube.row(1, 2);
        assert_eq!(row, &[120.0, 121.0, 122.0, 123.0]);
    }

    #[test]
    fn column_over_paths_reads_fixed_time_pillar() {
        let cube = Cube3::from_fn(3, 2, 2, |p, i, k| (p * 100 + i * 10 + k) as Real);
        let col = cube.column_over_paths(1, 0);
        assert_eq!(col, vec![10.0, 110.0, 210.0]);
    }
}
