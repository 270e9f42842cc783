//! Filler pool normalization.
//!
//! Raw filler images come in arbitrary sizes. Normalization stretches every
//! image to the mosaic tile size and caches its mean color, producing a
//! `FillerPool` whose entries all share one size. Both steps are batched maps
//! run through [`Executor`], which switches to parallel execution above a
//! pool-size threshold.

use crate::color::MeanColors;
use crate::exec::Executor;
use crate::raster::resize::resize;
use crate::raster::{Raster, Size};
use crate::trace::{trace_event, trace_span};
use crate::util::{MosaicError, MosaicResult};

/// Resizes every raster to `tile_size`, choosing the executor by pool size.
///
/// Pools with more than `threshold` entries are resized in parallel.
pub fn normalize(
    rasters: &[Raster],
    tile_size: Size,
    threshold: usize,
) -> MosaicResult<Vec<Raster>> {
    normalize_with(
        rasters,
        tile_size,
        Executor::for_batch(rasters.len(), threshold),
    )
}

/// Resizes every raster to `tile_size` with an explicit executor.
///
/// Output index `i` is always the resize of input index `i`. The first
/// malformed raster fails the whole batch.
pub fn normalize_with(
    rasters: &[Raster],
    tile_size: Size,
    executor: Executor,
) -> MosaicResult<Vec<Raster>> {
    if rasters.is_empty() {
        return Err(MosaicError::EmptyPool);
    }
    let tile_size = Size::new(tile_size.width, tile_size.height)?;
    executor.try_map_indexed(rasters, |index, raster| {
        raster
            .validate()
            .map_err(|_| MosaicError::MalformedPoolEntry {
                index,
                reason: "pixel buffer does not match its dimensions",
            })?;
        resize(raster, tile_size)
    })
}

/// Normalized filler images and their mean colors.
#[derive(Clone, Debug)]
pub struct FillerPool {
    tiles: Vec<Raster>,
    means: MeanColors,
    tile_size: Size,
}

impl FillerPool {
    /// Normalizes raw filler images and computes their mean colors.
    pub fn build(rasters: &[Raster], tile_size: Size, threshold: usize) -> MosaicResult<Self> {
        let _span = trace_span!("normalize_pool", count = rasters.len()).entered();
        let executor = Executor::for_batch(rasters.len(), threshold);
        let tiles = normalize_with(rasters, tile_size, executor)?;
        let means = MeanColors::compute(&tiles, executor)?;
        trace_event!(
            "pool_normalized",
            count = tiles.len(),
            parallel = executor == Executor::Parallel
        );
        Ok(Self {
            tiles,
            means,
            tile_size,
        })
    }

    /// Wraps tiles that are already normalized, computing their mean colors.
    ///
    /// Fails if the tiles do not all share one size.
    pub fn from_tiles(tiles: Vec<Raster>) -> MosaicResult<Self> {
        let first = tiles.first().ok_or(MosaicError::EmptyPool)?;
        let tile_size = first.size();
        check_uniform(&tiles, tile_size)?;
        let means = MeanColors::compute(&tiles, Executor::Sequential)?;
        Ok(Self {
            tiles,
            means,
            tile_size,
        })
    }

    /// Returns the normalized tiles.
    pub fn tiles(&self) -> &[Raster] {
        &self.tiles
    }

    /// Returns the tile at `index`.
    pub fn get(&self, index: usize) -> Option<&Raster> {
        self.tiles.get(index)
    }

    /// Returns the mean-color cache aligned with [`FillerPool::tiles`].
    pub fn means(&self) -> &MeanColors {
        &self.means
    }

    /// Returns the shared tile size.
    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    /// Returns the number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns true if the pool has no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Checks the pool invariants before it is handed to a strategy.
    pub fn validate(&self) -> MosaicResult<()> {
        if self.tiles.is_empty() {
            return Err(MosaicError::EmptyPool);
        }
        check_uniform(&self.tiles, self.tile_size)?;
        if self.means.len() != self.tiles.len() {
            return Err(MosaicError::InvalidInput(
                "mean color cache is not aligned with the pool",
            ));
        }
        Ok(())
    }
}

fn check_uniform(tiles: &[Raster], tile_size: Size) -> MosaicResult<()> {
    for (index, tile) in tiles.iter().enumerate() {
        if tile.validate().is_err() {
            return Err(MosaicError::MalformedPoolEntry {
                index,
                reason: "pixel buffer does not match its dimensions",
            });
        }
        if tile.size() != tile_size {
            return Err(MosaicError::MalformedPoolEntry {
                index,
                reason: "tile size differs from the pool tile size",
            });
        }
    }
    Ok(())
}
