//! Fork-join reduction over index ranges.
//!
//! One parallel primitive serves every heavy recomputation in this crate:
//! partition `[0, len)` into contiguous chunks, fold each chunk into a
//! private accumulator, then combine the partial accumulators. Workers never
//! share mutable state during the scan phase, so no locking is needed.
//!
//! Callers must supply an associative, commutative `merge` (and a `fold` that
//! agrees with it) so the final result is identical regardless of how the
//! range is chunked. That independence is part of the contract, not an
//! accident: the test suite exercises it with arbitrary grain sizes.

use rayon::prelude::*;
use std::ops::Range;

/// Default number of indices folded per worker chunk.
pub const DEFAULT_GRAIN: usize = 2048;

/// Reduce `[0, len)` with an explicit chunk size.
///
/// `fold` receives a whole chunk `Range` at once, so a worker can
/// short-circuit the remainder of its own chunk (siblings still run).
pub fn par_reduce_with_grain<A, ID, F, M>(
    len: usize,
    grain: usize,
    identity: ID,
    fold: F,
    merge: M,
) -> A
where
    A: Send,
    ID: Fn() -> A + Send + Sync,
    F: Fn(A, Range<usize>) -> A + Send + Sync,
    M: Fn(A, A) -> A + Send + Sync,
{
    if len == 0 {
        return identity();
    }
    let grain = grain.max(1);
    let starts: Vec<usize> = (0..len).step_by(grain).collect();
    starts
        .into_par_iter()
        .map(|start| fold(identity(), start..(start + grain).min(len)))
        .reduce(&identity, &merge)
}

/// Reduce `[0, len)` with the default grain.
pub fn par_reduce<A, ID, F, M>(len: usize, identity: ID, fold: F, merge: M) -> A
where
    A: Send,
    ID: Fn() -> A + Send + Sync,
    F: Fn(A, Range<usize>) -> A + Send + Sync,
    M: Fn(A, A) -> A + Send + Sync,
{
    par_reduce_with_grain(len, DEFAULT_GRAIN, identity, fold, merge)
}

/// Parallel "is any flag bit set" query over a byte array.
///
/// Returns `false` when the array is absent. Each worker tests `byte & mask`
/// and stops scanning its own chunk on the first hit; this is a local
/// short-circuit only, sibling chunks are still visited once. Partial results
/// merge by logical OR.
pub fn is_any_flag_set(bytes: Option<&[u8]>, mask: u8) -> bool {
    let Some(bytes) = bytes else {
        return false;
    };
    par_reduce(
        bytes.len(),
        || false,
        |hit, range| hit || bytes[range].iter().any(|b| b & mask != 0),
        |a, b| a || b,
    )
}
