//! Positional strategies that consume the pool in raster-scan order.

use crate::util::{MosaicError, MosaicResult};

/// Scan position `k` takes pool entry `k`; the pool size must equal `cells`.
pub(crate) fn straight(pool_len: usize, cells: usize) -> MosaicResult<Vec<usize>> {
    if pool_len != cells {
        return Err(MosaicError::PoolSizeMismatch {
            strategy: "straight",
            expected: cells,
            got: pool_len,
        });
    }
    Ok((0..cells).collect())
}

/// Scan position `k` takes pool entry `k mod pool_len`.
pub(crate) fn duplication(pool_len: usize, cells: usize) -> MosaicResult<Vec<usize>> {
    if pool_len == 0 {
        return Err(MosaicError::EmptyPool);
    }
    Ok((0..cells).map(|k| k % pool_len).collect())
}
