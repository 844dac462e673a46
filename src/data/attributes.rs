//! Attribute tables: the named arrays of one element domain.
//!
//! An [`AttributeTable`] owns the arrays attached to points or cells, the
//! active-scalar designation, the ghost-skip mask, and a revision clock
//! bumped on every observable mutation. Datasets consult the clock for
//! staleness checks instead of subscribing to change notifications.

use crate::clock::RevisionClock;
use crate::data::array::DataArray;
use crate::dataset::ghost::GHOST_ARRAY_NAME;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which element domain an attribute table spans.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AttributeDomain {
    Point,
    Cell,
}

impl fmt::Display for AttributeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Point => "point",
            Self::Cell => "cell",
        })
    }
}

/// Insertion-ordered collection of named per-element arrays.
///
/// Indices are stable: adding an array with an existing name replaces it in
/// place, and there is no removal, so the active-scalar index and cached
/// ghost lookups stay valid across mutations.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AttributeTable {
    arrays: Vec<DataArray>,
    active_scalars: Option<usize>,
    ghosts_to_skip: u8,
    revision: RevisionClock,
}

impl AttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revision of this table; bumped on every observable mutation.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision.current()
    }

    /// Record a mutation performed outside the table's own methods.
    pub fn mark_modified(&mut self) {
        self.revision.bump();
    }

    #[inline]
    pub fn num_arrays(&self) -> usize {
        self.arrays.len()
    }

    pub fn array(&self, index: usize) -> Option<&DataArray> {
        self.arrays.get(index)
    }

    /// Index of the array named `name`, if present. Unnamed arrays (empty
    /// string) are never matched by replacement but can be found here.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.arrays.iter().position(|a| a.name() == name)
    }

    pub fn array_by_name(&self, name: &str) -> Option<&DataArray> {
        self.index_of(name).map(|i| &self.arrays[i])
    }

    /// Add `array`, replacing any existing array with the same (non-empty)
    /// name. Returns the array's index.
    pub fn add_array(&mut self, array: DataArray) -> usize {
        self.revision.bump();
        if !array.name().is_empty() {
            if let Some(i) = self.index_of(array.name()) {
                self.arrays[i] = array;
                return i;
            }
        }
        self.arrays.push(array);
        self.arrays.len() - 1
    }

    /// Mutable access to an array; bumps the revision.
    pub fn array_by_name_mut(&mut self, name: &str) -> Option<&mut DataArray> {
        let i = self.index_of(name)?;
        self.revision.bump();
        Some(&mut self.arrays[i])
    }

    /// Iterate arrays in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DataArray> {
        self.arrays.iter()
    }

    /// Designate the active scalar field by array name. Returns the array's
    /// index, or `None` (without bumping the revision) if no such array.
    pub fn set_active_scalars(&mut self, name: &str) -> Option<usize> {
        let i = self.index_of(name)?;
        self.active_scalars = Some(i);
        self.revision.bump();
        Some(i)
    }

    /// Clear the active scalar designation.
    pub fn clear_active_scalars(&mut self) {
        if self.active_scalars.take().is_some() {
            self.revision.bump();
        }
    }

    /// The active scalar array, if designated.
    pub fn active_scalars(&self) -> Option<&DataArray> {
        self.active_scalars.map(|i| &self.arrays[i])
    }

    /// Ghost bits that exclude an element from range computations.
    #[inline]
    pub fn ghosts_to_skip(&self) -> u8 {
        self.ghosts_to_skip
    }

    pub fn set_ghosts_to_skip(&mut self, mask: u8) {
        if self.ghosts_to_skip != mask {
            self.ghosts_to_skip = mask;
            self.revision.bump();
        }
    }

    /// The ghost array attached to this table, if any.
    pub fn ghost_array(&self) -> Option<&DataArray> {
        self.array_by_name(GHOST_ARRAY_NAME)
    }

    /// Ghost bytes for this table, if a usable ghost array is attached.
    pub fn ghost_bytes(&self) -> Option<&[u8]> {
        self.ghost_array().and_then(|a| a.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalars(name: &str, values: Vec<f64>) -> DataArray {
        DataArray::float64(name, 1, values).unwrap()
    }

    #[test]
    fn add_replaces_same_name_in_place() {
        let mut t = AttributeTable::new();
        let i0 = t.add_array(scalars("a", vec![1.0]));
        let i1 = t.add_array(scalars("b", vec![2.0]));
        let i2 = t.add_array(scalars("a", vec![7.0]));
        assert_eq!((i0, i1, i2), (0, 1, 0));
        assert_eq!(t.num_arrays(), 2);
        assert_eq!(t.array_by_name("a").unwrap().value(0, 0), 7.0);
    }

    #[test]
    fn unnamed_arrays_do_not_replace_each_other() {
        let mut t = AttributeTable::new();
        t.add_array(scalars("", vec![1.0]));
        t.add_array(scalars("", vec![2.0]));
        assert_eq!(t.num_arrays(), 2);
    }

    #[test]
    fn mutations_bump_revision() {
        let mut t = AttributeTable::new();
        let r0 = t.revision();
        t.add_array(scalars("a", vec![1.0]));
        let r1 = t.revision();
        assert!(r1 > r0);
        t.array_by_name_mut("a").unwrap();
        let r2 = t.revision();
        assert!(r2 > r1);
        t.set_ghosts_to_skip(0x01);
        assert!(t.revision() > r2);
        // Setting the same mask again is not an observable mutation.
        let r3 = t.revision();
        t.set_ghosts_to_skip(0x01);
        assert_eq!(t.revision(), r3);
    }

    #[test]
    fn lookups_do_not_bump_revision() {
        let mut t = AttributeTable::new();
        t.add_array(scalars("a", vec![1.0]));
        let r = t.revision();
        let _ = t.array_by_name("a");
        let _ = t.index_of("a");
        let _ = t.active_scalars();
        assert_eq!(t.revision(), r);
    }

    #[test]
    fn active_scalars_follow_replacement() {
        let mut t = AttributeTable::new();
        t.add_array(scalars("s", vec![1.0, 2.0]));
        assert_eq!(t.set_active_scalars("s"), Some(0));
        t.add_array(scalars("s", vec![5.0, 9.0]));
        assert_eq!(t.active_scalars().unwrap().value(1, 0), 9.0);
    }

    #[test]
    fn missing_active_scalars_is_none() {
        let mut t = AttributeTable::new();
        assert_eq!(t.set_active_scalars("nope"), None);
        assert!(t.active_scalars().is_none());
    }
}
