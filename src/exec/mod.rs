//! Batched map execution.
//!
//! Pool-wide stages are pure maps over independent elements. `Executor`
//! chooses how the map runs; both variants return results in input order and
//! stop at the first failing element, so the choice never changes output.

#[cfg(feature = "rayon")]
mod rayon;

use crate::util::MosaicResult;

/// Pools larger than this are processed in parallel by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Strategy for running a batched map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Executor {
    /// Run on the calling thread.
    Sequential,
    /// Run on the rayon thread pool (sequential without the `rayon` feature).
    Parallel,
}

impl Executor {
    /// Selects `Parallel` when `len` exceeds `threshold`.
    pub fn for_batch(len: usize, threshold: usize) -> Self {
        if len > threshold {
            Executor::Parallel
        } else {
            Executor::Sequential
        }
    }

    /// Applies `f` to every item and collects the results in input order.
    pub fn try_map<T, U, F>(self, items: &[T], f: F) -> MosaicResult<Vec<U>>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> MosaicResult<U> + Sync + Send,
    {
        match self {
            Executor::Sequential => items.iter().map(f).collect(),
            #[cfg(feature = "rayon")]
            Executor::Parallel => self::rayon::try_map_par(items, f),
            #[cfg(not(feature = "rayon"))]
            Executor::Parallel => items.iter().map(f).collect(),
        }
    }

    /// Like [`Executor::try_map`] but also passes each item's index.
    pub fn try_map_indexed<T, U, F>(self, items: &[T], f: F) -> MosaicResult<Vec<U>>
    where
        T: Sync,
        U: Send,
        F: Fn(usize, &T) -> MosaicResult<U> + Sync + Send,
    {
        match self {
            Executor::Sequential => items.iter().enumerate().map(|(i, t)| f(i, t)).collect(),
            #[cfg(feature = "rayon")]
            Executor::Parallel => self::rayon::try_map_indexed_par(items, f),
            #[cfg(not(feature = "rayon"))]
            Executor::Parallel => items.iter().enumerate().map(|(i, t)| f(i, t)).collect(),
        }
    }
}
