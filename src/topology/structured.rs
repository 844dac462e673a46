//! Axis-aligned structured grid topology.

use super::Topology;
use super::extent::Extent;
use serde::{Deserialize, Serialize};

/// Logically rectilinear topology with uniform spacing: the point at
/// structured index `(i, j, k)` sits at `origin + (i, j, k) * spacing`.
///
/// Flat indices enumerate points i-fastest, then j, then k, matching the
/// ordering ghost classification assumes for per-element byte arrays.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructuredGrid {
    extent: Extent,
    origin: [f64; 3],
    spacing: [f64; 3],
}

impl StructuredGrid {
    pub fn new(extent: Extent, origin: [f64; 3], spacing: [f64; 3]) -> Self {
        Self {
            extent,
            origin,
            spacing,
        }
    }

    /// Unit-spacing grid anchored at the coordinate origin.
    pub fn with_extent(extent: Extent) -> Self {
        Self::new(extent, [0.0; 3], [1.0; 3])
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Replace the local extent. Callers stamp the owning dataset afterwards.
    pub fn set_extent(&mut self, extent: Extent) {
        self.extent = extent;
    }
}

impl Topology for StructuredGrid {
    fn num_points(&self) -> usize {
        self.extent.num_points()
    }

    fn num_cells(&self) -> usize {
        self.extent.num_cells()
    }

    fn point(&self, index: usize) -> [f64; 3] {
        let dims = self.extent.point_dims();
        let ni = dims[0].max(1);
        let nj = dims[1].max(1);
        let local = [index % ni, (index / ni) % nj, index / (ni * nj)];
        std::array::from_fn(|a| {
            let idx = self.extent.lo(a) + local[a] as i64;
            self.origin[a] + idx as f64 * self.spacing[a]
        })
    }

    fn structured_extent(&self) -> Option<Extent> {
        Some(self.extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_extent() {
        let g = StructuredGrid::with_extent(Extent::new([0, 3, 0, 2, 0, 0]));
        assert_eq!(g.num_points(), 12);
        assert_eq!(g.num_cells(), 6);
        assert_eq!(g.structured_extent(), Some(Extent::new([0, 3, 0, 2, 0, 0])));
    }

    #[test]
    fn points_enumerate_i_fastest() {
        let g = StructuredGrid::new(
            Extent::new([1, 2, 0, 1, 0, 0]),
            [10.0, 0.0, 0.0],
            [0.5, 2.0, 1.0],
        );
        // index 0 -> (i=1, j=0, k=0), index 3 -> (i=2, j=1, k=0)
        assert_eq!(g.point(0), [10.5, 0.0, 0.0]);
        assert_eq!(g.point(1), [11.0, 0.0, 0.0]);
        assert_eq!(g.point(2), [10.5, 2.0, 0.0]);
        assert_eq!(g.point(3), [11.0, 2.0, 0.0]);
    }
}
