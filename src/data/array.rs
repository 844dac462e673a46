//! Named, fixed-tuple-width attribute arrays.
//!
//! A [`DataArray`] holds one value per `(tuple, component)` pair for every
//! point or cell of a domain. Scalars and coordinates use `f64` storage;
//! ghost bitmasks use `u8`. The name may be the empty string, which consumers
//! treat as "unnamed".

use crate::dataset_error::DatasetError;
use crate::reduce::par_reduce;
use serde::{Deserialize, Serialize};

/// Backing storage for a [`DataArray`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ArrayValues {
    Float64(Vec<f64>),
    UInt8(Vec<u8>),
}

impl ArrayValues {
    #[inline]
    fn len(&self) -> usize {
        match self {
            Self::Float64(v) => v.len(),
            Self::UInt8(v) => v.len(),
        }
    }

    #[inline]
    fn get_f64(&self, i: usize) -> f64 {
        match self {
            Self::Float64(v) => v[i],
            Self::UInt8(v) => v[i] as f64,
        }
    }
}

/// A named array of fixed-width tuples attached to the point or cell domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataArray {
    name: String,
    components: usize,
    values: ArrayValues,
}

impl DataArray {
    /// `f64` array with `components` values per tuple.
    ///
    /// # Errors
    /// `ZeroComponentArray` if `components == 0`; `RaggedArray` if the value
    /// count is not a multiple of `components`.
    pub fn float64(
        name: impl Into<String>,
        components: usize,
        values: Vec<f64>,
    ) -> Result<Self, DatasetError> {
        Self::build(name.into(), components, ArrayValues::Float64(values))
    }

    /// `u8` array with `components` values per tuple.
    pub fn uint8(
        name: impl Into<String>,
        components: usize,
        values: Vec<u8>,
    ) -> Result<Self, DatasetError> {
        Self::build(name.into(), components, ArrayValues::UInt8(values))
    }

    /// Single-component `u8` array of `len` zeroes (ghost-mask shape).
    pub fn zeroed_uint8(name: impl Into<String>, len: usize) -> Self {
        Self {
            name: name.into(),
            components: 1,
            values: ArrayValues::UInt8(vec![0; len]),
        }
    }

    fn build(name: String, components: usize, values: ArrayValues) -> Result<Self, DatasetError> {
        if components == 0 {
            return Err(DatasetError::ZeroComponentArray(name));
        }
        if values.len() % components != 0 {
            return Err(DatasetError::RaggedArray {
                name,
                len: values.len(),
                components,
            });
        }
        Ok(Self {
            name,
            components,
            values,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn num_components(&self) -> usize {
        self.components
    }

    #[inline]
    pub fn num_tuples(&self) -> usize {
        self.values.len() / self.components
    }

    /// Value at `(tuple, component)`, widened to `f64`.
    ///
    /// # Panics
    /// Callers keep `tuple` below [`num_tuples`](Self::num_tuples) and
    /// `component` below [`num_components`](Self::num_components).
    #[inline]
    pub fn value(&self, tuple: usize, component: usize) -> f64 {
        debug_assert!(tuple < self.num_tuples() && component < self.components);
        self.values.get_f64(tuple * self.components + component)
    }

    /// Byte view for single-component `u8` arrays (ghost masks), else `None`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.values {
            ArrayValues::UInt8(v) if self.components == 1 => Some(v),
            _ => None,
        }
    }

    /// Mutable byte view for single-component `u8` arrays.
    pub fn as_bytes_mut(&mut self) -> Option<&mut [u8]> {
        match &mut self.values {
            ArrayValues::UInt8(v) if self.components == 1 => Some(v),
            _ => None,
        }
    }

    /// Grow or shrink to `tuples` tuples, zero-filling new entries.
    pub(crate) fn resize_tuples(&mut self, tuples: usize) {
        let len = tuples * self.components;
        match &mut self.values {
            ArrayValues::Float64(v) => v.resize(len, 0.0),
            ArrayValues::UInt8(v) => v.resize(len, 0),
        }
    }

    /// Parallel `(min, max)` over one component, skipping tuples whose ghost
    /// byte intersects `skip_mask`.
    ///
    /// Returns `None` for an empty array, an out-of-range component, or when
    /// every tuple is skipped.
    pub fn component_range(
        &self,
        component: usize,
        ghosts: Option<&[u8]>,
        skip_mask: u8,
    ) -> Option<(f64, f64)> {
        if component >= self.components {
            return None;
        }
        let (min, max) = par_reduce(
            self.num_tuples(),
            || (f64::INFINITY, f64::NEG_INFINITY),
            |mut acc, range| {
                for tuple in range {
                    if let Some(g) = ghosts {
                        if g.get(tuple).is_some_and(|b| b & skip_mask != 0) {
                            continue;
                        }
                    }
                    let v = self.value(tuple, component);
                    acc.0 = acc.0.min(v);
                    acc.1 = acc.1.max(v);
                }
                acc
            },
            |a, b| (a.0.min(b.0), a.1.max(b.1)),
        );
        (min <= max).then_some((min, max))
    }
}
