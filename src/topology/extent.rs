//! Structured index extents.
//!
//! An [`Extent`] is the ordered 6-tuple `[imin, imax, jmin, jmax, kmin, kmax]`
//! describing a structured index sub-range. Bounds are inclusive on both
//! ends; a degenerate axis (`min == max`) carries one plane of points and one
//! cell, so 1-D and 2-D topologies fit the same 3-axis representation.

use serde::{Deserialize, Serialize};

/// Inclusive structured index range along three axes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Extent {
    lo: [i64; 3],
    hi: [i64; 3],
}

impl Extent {
    /// Build an extent from `[imin, imax, jmin, jmax, kmin, kmax]`.
    pub fn new(bounds: [i64; 6]) -> Self {
        Self {
            lo: [bounds[0], bounds[2], bounds[4]],
            hi: [bounds[1], bounds[3], bounds[5]],
        }
    }

    /// Lower bound along `axis` (0 = i, 1 = j, 2 = k).
    #[inline]
    pub fn lo(&self, axis: usize) -> i64 {
        self.lo[axis]
    }

    /// Upper bound along `axis`, inclusive.
    #[inline]
    pub fn hi(&self, axis: usize) -> i64 {
        self.hi[axis]
    }

    /// True if `axis` spans a single index plane.
    #[inline]
    pub fn is_degenerate(&self, axis: usize) -> bool {
        self.lo[axis] == self.hi[axis]
    }

    /// Number of point planes along each axis.
    pub fn point_dims(&self) -> [usize; 3] {
        std::array::from_fn(|a| (self.hi[a] - self.lo[a] + 1).max(0) as usize)
    }

    /// Number of cells along each axis; a degenerate axis counts one cell.
    pub fn cell_dims(&self) -> [usize; 3] {
        self.point_dims().map(|d| d.saturating_sub(1).max(1))
    }

    /// Total point count.
    pub fn num_points(&self) -> usize {
        self.point_dims().iter().product()
    }

    /// Total cell count; 0 when the extent holds no points at all.
    pub fn num_cells(&self) -> usize {
        if self.num_points() == 0 {
            0
        } else {
            self.cell_dims().iter().product()
        }
    }

    /// Flat `[imin, imax, jmin, jmax, kmin, kmax]` form.
    pub fn as_array(&self) -> [i64; 6] {
        [
            self.lo[0], self.hi[0], self.lo[1], self.hi[1], self.lo[2], self.hi[2],
        ]
    }

    /// Thicken one axis by a single plane. Used by cell-domain ghost
    /// classification to treat 1-D/2-D ranges as 3-D.
    #[inline]
    pub(crate) fn bump_hi(&mut self, axis: usize) {
        self.hi[axis] += 1;
    }
}
