//! Axis-aligned bounding boxes with an explicit empty state.

use serde::{Deserialize, Serialize};

/// Bounding box of point coordinates.
///
/// `Empty` is a representable state rather than an extreme-float sentinel, so
/// "no bounds yet" and "zero points" cannot be confused with real geometry.
/// Whenever `Valid`, `min[a] <= max[a]` holds on every axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Bounds {
    Empty,
    Valid { min: [f64; 3], max: [f64; 3] },
}

impl Bounds {
    /// Per-axis midpoint; `None` when empty.
    pub fn center(&self) -> Option<[f64; 3]> {
        match self {
            Self::Empty => None,
            Self::Valid { min, max } => Some(std::array::from_fn(|a| (min[a] + max[a]) / 2.0)),
        }
    }

    /// Squared diagonal length; 0 when empty.
    pub fn length2(&self) -> f64 {
        match self {
            Self::Empty => 0.0,
            Self::Valid { min, max } => (0..3).map(|a| (max[a] - min[a]).powi(2)).sum(),
        }
    }

    /// Diagonal length; 0 when empty.
    pub fn length(&self) -> f64 {
        self.length2().sqrt()
    }

    /// Flat `[xmin, xmax, ymin, ymax, zmin, zmax]` form; `None` when empty.
    pub fn as_array(&self) -> Option<[f64; 6]> {
        match self {
            Self::Empty => None,
            Self::Valid { min, max } => {
                Some([min[0], max[0], min[1], max[1], min[2], max[2]])
            }
        }
    }
}

/// Per-axis `(min, max)` accumulator for the parallel bounds reduction.
#[derive(Copy, Clone, Debug)]
pub(crate) struct BoundsAccumulator {
    min: [f64; 3],
    max: [f64; 3],
}

impl BoundsAccumulator {
    pub(crate) fn identity() -> Self {
        Self {
            min: [f64::INFINITY; 3],
            max: [f64::NEG_INFINITY; 3],
        }
    }

    #[inline]
    pub(crate) fn fold(&mut self, p: [f64; 3]) {
        for a in 0..3 {
            self.min[a] = self.min[a].min(p[a]);
            self.max[a] = self.max[a].max(p[a]);
        }
    }

    pub(crate) fn merge(mut self, other: Self) -> Self {
        for a in 0..3 {
            self.min[a] = self.min[a].min(other.min[a]);
            self.max[a] = self.max[a].max(other.max[a]);
        }
        self
    }

    pub(crate) fn finish(self) -> Bounds {
        if self.min.iter().zip(&self.max).all(|(mn, mx)| mn <= mx) {
            Bounds::Valid {
                min: self.min,
                max: self.max,
            }
        } else {
            Bounds::Empty
        }
    }
}
