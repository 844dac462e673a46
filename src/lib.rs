//! # mesh-dataset
//!
//! mesh-dataset is the attribute-cache and boundary-classification core of a
//! mesh/dataset abstraction for scientific-visualization and simulation
//! pipelines. A dataset couples a topology (points, and cells built from
//! points) with two parallel attribute tables, one per element domain, and
//! keeps derived quantities consistent with an asynchronously mutating
//! topology without recomputing them on every access.
//!
//! ## Features
//! - Lazily recomputed, parallel-reduced bounding box and active-scalar range
//! - Revision clocks for cheap staleness checks across dataset and tables
//! - Ghost (duplicate) classification of structured sub-domain boundaries
//! - Attribute/topology length consistency checking with warning records
//! - A single fork-join reduce primitive shared by every heavy computation
//!
//! ## Concurrency
//!
//! Heavy recomputation is data-parallel fork-join via rayon: workers fold
//! exclusively-owned accumulators and a merge phase combines them, so the
//! scan phase needs no locking. The lazy check-compute-stamp sequence on each
//! cache is serialized by the `&mut self` receiver; a shared dataset needs an
//! external lock around the accessor, not around the parallel scan. No entry
//! point suspends, blocks indefinitely, or is cancellable.
//!
//! ## Non-goals
//!
//! Concrete cell geometry, coordinate/connectivity storage, rendering,
//! iterators, file I/O, and distributed ghost exchange live in collaborating
//! crates; this core only classifies which local elements are ghosts given a
//! known reference extent.

pub mod clock;
pub mod data;
pub mod dataset;
pub mod dataset_error;
pub mod reduce;
pub mod topology;

/// A convenient prelude importing the most-used traits and types.
pub mod prelude {
    pub use crate::clock::RevisionClock;
    pub use crate::data::array::{ArrayValues, DataArray};
    pub use crate::data::attributes::{AttributeDomain, AttributeTable};
    pub use crate::dataset::bounds::Bounds;
    pub use crate::dataset::ghost::{DUPLICATE_CELL, DUPLICATE_POINT, GHOST_ARRAY_NAME};
    pub use crate::dataset::{AttributeSizeIssue, Dataset};
    pub use crate::dataset_error::DatasetError;
    pub use crate::reduce::{is_any_flag_set, par_reduce, par_reduce_with_grain};
    pub use crate::topology::Topology;
    pub use crate::topology::extent::Extent;
    pub use crate::topology::structured::StructuredGrid;
}
