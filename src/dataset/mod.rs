//! Dataset: topology plus attribute tables and their derived caches.
//!
//! A [`Dataset`] couples a topology with two parallel attribute tables (one
//! per element domain) and maintains lazily recomputed derived quantities:
//! the spatial bounding box, the active-scalar value range, and cached ghost
//! array lookups. Each cache stamps the effective revision it was computed
//! at and recomputes only when the revision has moved, so repeated queries
//! against an unchanged dataset cost one comparison.
//!
//! Lazy accessors take `&mut self`: the check-compute-stamp sequence is three
//! separate steps, and the exclusive borrow is the external serialization the
//! sequence requires. The parallel scans inside a recomputation share nothing
//! mutable and need no locking.

pub mod bounds;
pub mod ghost;

use crate::clock::RevisionClock;
use crate::data::array::DataArray;
use crate::data::attributes::{AttributeDomain, AttributeTable};
use crate::dataset_error::DatasetError;
use crate::reduce::{is_any_flag_set, par_reduce};
use crate::topology::Topology;
use crate::topology::extent::Extent;
use self::bounds::{Bounds, BoundsAccumulator};
use self::ghost::{DUPLICATE_CELL, DUPLICATE_POINT, GHOST_ARRAY_NAME};
use serde::{Deserialize, Serialize};

/// A recorded, non-fatal attribute-size inconsistency: an array longer than
/// the topology requires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeSizeIssue {
    pub domain: AttributeDomain,
    pub name: String,
    pub components: usize,
    pub tuples: usize,
    pub expected: usize,
}

/// Memoized value plus the effective revision it was computed at.
#[derive(Copy, Clone, Debug)]
struct Stamped<V> {
    value: V,
    computed_at: u64,
}

/// Pull-based ghost-array lookup cache: re-resolves the array index whenever
/// the owning table's revision moves, avoiding a name search per query.
#[derive(Copy, Clone, Debug, Default)]
struct GhostLookup {
    index: Option<usize>,
    seen_revision: u64,
}

impl GhostLookup {
    fn resolve(&mut self, table: &AttributeTable) -> Option<usize> {
        if self.seen_revision != table.revision() {
            self.index = table.index_of(GHOST_ARRAY_NAME);
            self.seen_revision = table.revision();
        }
        self.index
    }
}

/// Topology, point/cell attribute tables, and derived caches.
#[derive(Debug)]
pub struct Dataset<T> {
    topology: T,
    point_data: AttributeTable,
    cell_data: AttributeTable,
    clock: RevisionClock,
    bounds: Stamped<Bounds>,
    scalar_range: Stamped<(f64, f64)>,
    point_ghost: GhostLookup,
    cell_ghost: GhostLookup,
}

impl<T: Topology> Dataset<T> {
    pub fn new(topology: T) -> Self {
        Self {
            topology,
            point_data: AttributeTable::new(),
            cell_data: AttributeTable::new(),
            clock: RevisionClock::new(),
            bounds: Stamped {
                value: Bounds::Empty,
                computed_at: 0,
            },
            scalar_range: Stamped {
                value: (0.0, 1.0),
                computed_at: 0,
            },
            point_ghost: GhostLookup::default(),
            cell_ghost: GhostLookup::default(),
        }
    }

    #[inline]
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// Mutable topology access. The dataset's clock is *not* advanced
    /// automatically; call [`mark_modified`](Self::mark_modified) after
    /// observable changes so caches notice them.
    pub fn topology_mut(&mut self) -> &mut T {
        &mut self.topology
    }

    #[inline]
    pub fn point_data(&self) -> &AttributeTable {
        &self.point_data
    }

    pub fn point_data_mut(&mut self) -> &mut AttributeTable {
        &mut self.point_data
    }

    #[inline]
    pub fn cell_data(&self) -> &AttributeTable {
        &self.cell_data
    }

    pub fn cell_data_mut(&mut self) -> &mut AttributeTable {
        &mut self.cell_data
    }

    /// Attribute table for `domain`.
    pub fn attributes(&self, domain: AttributeDomain) -> &AttributeTable {
        match domain {
            AttributeDomain::Point => &self.point_data,
            AttributeDomain::Cell => &self.cell_data,
        }
    }

    /// Record a mutation of dataset-owned state (e.g. topology coordinates).
    pub fn mark_modified(&mut self) {
        self.clock.bump();
    }

    /// Effective revision: the maximum of the dataset's own clock and both
    /// attribute tables' revisions. Monotonic.
    pub fn effective_revision(&self) -> u64 {
        self.clock
            .current()
            .max(self.point_data.revision())
            .max(self.cell_data.revision())
    }

    /// Number of elements in `domain`.
    pub fn num_elements(&self, domain: AttributeDomain) -> usize {
        match domain {
            AttributeDomain::Point => self.topology.num_points(),
            AttributeDomain::Cell => self.topology.num_cells(),
        }
    }

    /// Validate array lengths against topology counts.
    ///
    /// Point arrays are scanned first. An array with fewer tuples than the
    /// domain requires stops the scan immediately with
    /// [`DatasetError::AttributeSizeMismatch`]. An oversized array is logged,
    /// recorded, and scanning continues. Cell arrays are scanned under the
    /// same rule only when every point array passed.
    pub fn check_attributes(&self) -> Result<Vec<AttributeSizeIssue>, DatasetError> {
        let mut issues = Vec::new();
        self.check_table(AttributeDomain::Point, &mut issues)?;
        self.check_table(AttributeDomain::Cell, &mut issues)?;
        Ok(issues)
    }

    fn check_table(
        &self,
        domain: AttributeDomain,
        issues: &mut Vec<AttributeSizeIssue>,
    ) -> Result<(), DatasetError> {
        let table = self.attributes(domain);
        if table.num_arrays() == 0 {
            return Ok(());
        }
        // Counting elements can be expensive for some topologies; do it once.
        let expected = self.num_elements(domain);
        for array in table.iter() {
            let tuples = array.num_tuples();
            if tuples < expected {
                return Err(DatasetError::AttributeSizeMismatch {
                    domain,
                    name: array.name().to_string(),
                    components: array.num_components(),
                    tuples,
                    expected,
                });
            }
            if tuples > expected {
                log::warn!(
                    "{domain} array `{}` with {} components has {tuples} tuples but there are only {expected} {domain}s",
                    array.name(),
                    array.num_components(),
                );
                issues.push(AttributeSizeIssue {
                    domain,
                    name: array.name().to_string(),
                    components: array.num_components(),
                    tuples,
                    expected,
                });
            }
        }
        Ok(())
    }

    /// `(min, max)` of the active scalar field, merged across the point and
    /// cell tables and skipping elements masked by each table's ghost-skip
    /// configuration. `(0, 1)` when neither table designates scalars.
    ///
    /// The cache stamp is independent of the bounds stamp.
    pub fn scalar_range(&mut self) -> (f64, f64) {
        let revision = self.effective_revision();
        if self.scalar_range.computed_at < revision {
            self.scalar_range = Stamped {
                value: self.compute_scalar_range(),
                computed_at: revision,
            };
        }
        self.scalar_range.value
    }

    fn compute_scalar_range(&self) -> (f64, f64) {
        let point = Self::table_scalar_range(&self.point_data);
        let cell = Self::table_scalar_range(&self.cell_data);
        match (point, cell) {
            (Some(p), Some(c)) => (p.0.min(c.0), p.1.max(c.1)),
            (Some(p), None) => p,
            (None, Some(c)) => c,
            (None, None) => (0.0, 1.0),
        }
    }

    fn table_scalar_range(table: &AttributeTable) -> Option<(f64, f64)> {
        let scalars = table.active_scalars()?;
        scalars.component_range(0, table.ghost_bytes(), table.ghosts_to_skip())
    }

    /// Classify elements of the local structured extent outside `reference`
    /// as duplicate ghosts.
    ///
    /// No-op for unstructured topologies or when the local extent equals
    /// `reference` exactly. Ghost arrays are created zero-initialized on
    /// first use and accumulate bits across calls; a bit set by an earlier
    /// call is never cleared. Point classification is skipped when
    /// `cell_only`.
    pub fn generate_ghost_array(&mut self, reference: Extent, cell_only: bool) {
        let Some(extent) = self.topology.structured_extent() else {
            return;
        };
        if extent == reference {
            return;
        }
        if !cell_only {
            let bytes = Self::fetch_or_create_ghost(&mut self.point_data, extent.num_points());
            ghost::mark_duplicate_points(bytes, extent, reference);
        }
        let bytes = Self::fetch_or_create_ghost(&mut self.cell_data, extent.num_cells());
        ghost::mark_duplicate_cells(bytes, extent, reference);
    }

    /// Zeroed ghost byte array for `table`, created (or resized) to `len`.
    fn fetch_or_create_ghost(table: &mut AttributeTable, len: usize) -> &mut [u8] {
        let usable = table
            .array_by_name(GHOST_ARRAY_NAME)
            .is_some_and(|a| a.as_bytes().is_some());
        if !usable {
            table.add_array(DataArray::zeroed_uint8(GHOST_ARRAY_NAME, len));
        }
        let array = table
            .array_by_name_mut(GHOST_ARRAY_NAME)
            .expect("ghost array was just ensured");
        array.resize_tuples(len);
        array
            .as_bytes_mut()
            .expect("ghost array is single-component u8")
    }

    /// Create-if-absent a zeroed point ghost array sized to the topology.
    pub fn allocate_point_ghost_array(&mut self) -> &DataArray {
        let len = self.topology.num_points();
        Self::fetch_or_create_ghost(&mut self.point_data, len);
        self.point_data
            .ghost_array()
            .expect("ghost array was just ensured")
    }

    /// Create-if-absent a zeroed cell ghost array sized to the topology.
    pub fn allocate_cell_ghost_array(&mut self) -> &DataArray {
        let len = self.topology.num_cells();
        Self::fetch_or_create_ghost(&mut self.cell_data, len);
        self.cell_data
            .ghost_array()
            .expect("ghost array was just ensured")
    }

    /// The ghost array for `domain`, if one is attached. Lookup is cached
    /// and re-resolved only when the owning table's revision moves.
    pub fn ghost_array(&mut self, domain: AttributeDomain) -> Option<&DataArray> {
        let index = match domain {
            AttributeDomain::Point => self.point_ghost.resolve(&self.point_data),
            AttributeDomain::Cell => self.cell_ghost.resolve(&self.cell_data),
        }?;
        self.attributes(domain).array(index)
    }

    /// True iff a point ghost array exists and any point carries the
    /// duplicate bit.
    pub fn has_any_ghost_points(&mut self) -> bool {
        let bytes = self
            .ghost_array(AttributeDomain::Point)
            .and_then(|a| a.as_bytes());
        is_any_flag_set(bytes, DUPLICATE_POINT)
    }

    /// True iff a cell ghost array exists and any cell carries the duplicate
    /// bit.
    pub fn has_any_ghost_cells(&mut self) -> bool {
        let bytes = self
            .ghost_array(AttributeDomain::Cell)
            .and_then(|a| a.as_bytes());
        is_any_flag_set(bytes, DUPLICATE_CELL)
    }
}

impl<T: Topology + Sync> Dataset<T> {
    /// Bounding box of the point coordinates, recomputed only when the
    /// effective revision has moved past the last computation. Zero points
    /// yield [`Bounds::Empty`].
    pub fn bounds(&mut self) -> Bounds {
        let revision = self.effective_revision();
        if self.bounds.computed_at < revision {
            self.bounds = Stamped {
                value: self.compute_bounds(),
                computed_at: revision,
            };
        }
        self.bounds.value
    }

    fn compute_bounds(&self) -> Bounds {
        let n = self.topology.num_points();
        if n == 0 {
            return Bounds::Empty;
        }
        let topo = &self.topology;
        par_reduce(
            n,
            BoundsAccumulator::identity,
            |mut acc, range| {
                for index in range {
                    acc.fold(topo.point(index));
                }
                acc
            },
            BoundsAccumulator::merge,
        )
        .finish()
    }

    /// Center of the bounding box; `None` for an empty dataset.
    pub fn center(&mut self) -> Option<[f64; 3]> {
        self.bounds().center()
    }

    /// Squared diagonal length of the bounding box; 0 when empty.
    pub fn length2(&mut self) -> f64 {
        self.bounds().length2()
    }

    /// Diagonal length of the bounding box; 0 when empty.
    pub fn length(&mut self) -> f64 {
        self.bounds().length()
    }
}
