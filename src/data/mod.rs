//! Attribute storage: named arrays and per-domain tables.

pub mod array;
pub mod attributes;

pub use array::{ArrayValues, DataArray};
pub use attributes::{AttributeDomain, AttributeTable};
