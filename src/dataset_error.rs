//! DatasetError: unified error type for mesh-dataset public APIs.
//!
//! All failures in this crate are communicated through `Result` values so
//! callers can inspect outcomes without unwinding; panics are reserved for
//! violated indexing contracts, which the offending accessors document.

use crate::data::attributes::AttributeDomain;
use thiserror::Error;

/// Unified error type for mesh-dataset operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatasetError {
    /// An attribute array holds fewer tuples than the topology requires.
    /// This is the fatal arm of the attribute consistency check.
    #[error(
        "{domain} array `{name}` with {components} components only has {tuples} tuples but there are {expected} {domain}s"
    )]
    AttributeSizeMismatch {
        domain: AttributeDomain,
        name: String,
        components: usize,
        tuples: usize,
        expected: usize,
    },
    /// Attempted to construct a data array with zero components per tuple.
    #[error("data array `{0}` must have at least one component")]
    ZeroComponentArray(String),
    /// Array value count is not a whole number of tuples.
    #[error("data array `{name}` holds {len} values, not divisible by {components} components")]
    RaggedArray {
        name: String,
        len: usize,
        components: usize,
    },
}
