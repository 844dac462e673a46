//! Shared test topologies.
#![allow(dead_code)]

use mesh_dataset::topology::Topology;

/// Unstructured point set with an explicit cell count.
pub struct PointCloud {
    pub points: Vec<[f64; 3]>,
    pub cells: usize,
}

impl PointCloud {
    pub fn new(points: Vec<[f64; 3]>) -> Self {
        Self { points, cells: 0 }
    }

    pub fn with_cells(points: Vec<[f64; 3]>, cells: usize) -> Self {
        Self { points, cells }
    }
}

impl Topology for PointCloud {
    fn num_points(&self) -> usize {
        self.points.len()
    }

    fn num_cells(&self) -> usize {
        self.cells
    }

    fn point(&self, index: usize) -> [f64; 3] {
        self.points[index]
    }
}
