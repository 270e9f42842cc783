//! Rayon-parallel batched maps (feature-gated).
//!
//! Indexed parallel iterators collect into a `Vec` by position, so the output
//! order matches the input regardless of which worker finishes first.

use crate::util::MosaicResult;
use rayon::prelude::*;

pub(super) fn try_map_par<T, U, F>(items: &[T], f: F) -> MosaicResult<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> MosaicResult<U> + Sync + Send,
{
    items.par_iter().map(f).collect()
}

pub(super) fn try_map_indexed_par<T, U, F>(items: &[T], f: F) -> MosaicResult<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(usize, &T) -> MosaicResult<U> + Sync + Send,
{
    items
        .par_iter()
        .enumerate()
        .map(|(i, item)| f(i, item))
        .collect()
}
