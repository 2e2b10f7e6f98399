//! Row-partitioned iteration over output buffers.
//!
//! With the `parallel` feature, rows are handed to rayon workers; each
//! worker owns a disjoint row slice, so no synchronization is needed.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Call `f(row_index, row)` for every `row_len`-sized row of `buf`.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_row<T, F>(buf: &mut [T], row_len: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    if row_len == 0 {
        return;
    }
    buf.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

/// Call `f(row_index, row)` for every `row_len`-sized row of `buf`
/// (single-threaded fallback).
#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_row<T, F>(buf: &mut [T], row_len: usize, f: F)
where
    F: Fn(usize, &mut [T]),
{
    if row_len == 0 {
        return;
    }
    buf.chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}
