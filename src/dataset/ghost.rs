//! Ghost (duplicate) element classification for structured extents.
//!
//! A ghost element is present in the local sub-domain but authoritatively
//! owned by a neighbor. Classification marks every structured index outside a
//! reference extent by OR-ing a duplicate bit into the element's ghost byte.
//! Other bits in the byte belong to other subsystems, so all operations here
//! OR to set and AND to test, never overwriting the full byte.

use crate::topology::extent::Extent;
use rayon::prelude::*;

/// Well-known name of the ghost array in point and cell attribute tables.
pub const GHOST_ARRAY_NAME: &str = "ghost_type";

/// Point is a duplicate of a point owned by a neighboring sub-domain.
pub const DUPLICATE_POINT: u8 = 0x01;

/// Cell is a duplicate of a cell owned by a neighboring sub-domain.
pub const DUPLICATE_CELL: u8 = 0x01;

/// Per-axis offset of a point index from an inclusive reference range.
#[inline]
fn point_offset(idx: i64, lo: i64, hi: i64) -> i64 {
    if idx < lo {
        lo - idx
    } else if idx > hi {
        idx - hi
    } else {
        0
    }
}

/// Per-axis offset of a cell index from a half-open reference range
/// (upper bound exclusive after thickening).
#[inline]
fn cell_offset(idx: i64, lo: i64, hi: i64) -> i64 {
    if idx < lo {
        lo - idx
    } else if idx >= hi {
        idx - hi + 1
    } else {
        0
    }
}

/// Split a flat structured index into local `(i, j, k)` offsets, i-fastest.
#[inline]
fn delinearize(n: usize, dims: [usize; 3]) -> [usize; 3] {
    let ni = dims[0].max(1);
    let nj = dims[1].max(1);
    [n % ni, (n / ni) % nj, n / (ni * nj)]
}

/// OR `DUPLICATE_POINT` into every point of `extent` outside `reference`.
///
/// `ghost` is the point-domain byte array, indexed i-fastest over `extent`.
/// The boundary distance is the maximum of the per-axis offsets (Chebyshev),
/// so a point is ghost iff it falls outside the reference box on any axis.
pub(crate) fn mark_duplicate_points(ghost: &mut [u8], extent: Extent, reference: Extent) {
    let dims = extent.point_dims();
    ghost.par_iter_mut().enumerate().for_each(|(n, byte)| {
        let local = delinearize(n, dims);
        let mut dist = 0;
        for a in 0..3 {
            let idx = extent.lo(a) + local[a] as i64;
            dist = dist.max(point_offset(idx, reference.lo(a), reference.hi(a)));
        }
        if dist > 0 {
            *byte |= DUPLICATE_POINT;
        }
    });
}

/// OR `DUPLICATE_CELL` into every cell of `extent` outside `reference`.
///
/// Degenerate axes are thickened on both extents first so 1-D and 2-D
/// topologies run through the same 3-axis loop; cell indices then run over
/// half-open per-axis ranges.
pub(crate) fn mark_duplicate_cells(ghost: &mut [u8], extent: Extent, reference: Extent) {
    let mut extent = extent;
    let mut reference = reference;
    for a in 0..3 {
        if extent.is_degenerate(a) {
            extent.bump_hi(a);
            reference.bump_hi(a);
        }
    }
    let dims: [usize; 3] = std::array::from_fn(|a| (extent.hi(a) - extent.lo(a)).max(0) as usize);
    ghost.par_iter_mut().enumerate().for_each(|(n, byte)| {
        let local = delinearize(n, dims);
        let mut dist = 0;
        for a in 0..3 {
            let idx = extent.lo(a) + local[a] as i64;
            dist = dist.max(cell_offset(idx, reference.lo(a), reference.hi(a)));
        }
        if dist > 0 {
            *byte |= DUPLICATE_CELL;
        }
    });
}
