//! Topology collaborators: element counts, coordinates, structured extents.
//!
//! Concrete connectivity and coordinate storage live outside this crate. The
//! dataset core consumes a small query capability: how many points and cells
//! exist, where a point sits in space, and (for logically rectilinear
//! topologies) which structured index range the local sub-domain covers.

pub mod extent;
pub mod structured;

pub use extent::Extent;
pub use structured::StructuredGrid;

/// Query capability a [`Dataset`](crate::dataset::Dataset) needs from its
/// topology.
pub trait Topology {
    /// Number of points in the topology.
    fn num_points(&self) -> usize;

    /// Number of cells in the topology.
    fn num_cells(&self) -> usize;

    /// Coordinates of the point at `index`; callers keep `index` below
    /// [`num_points`](Self::num_points).
    fn point(&self, index: usize) -> [f64; 3];

    /// The local structured index extent, if the topology is logically
    /// rectilinear. `None` for unstructured topologies, which makes ghost
    /// classification a no-op.
    fn structured_extent(&self) -> Option<Extent> {
        None
    }
}
