//! End-to-end mosaic construction.
//!
//! The pipeline resizes the target to the grid size, normalizes the filler
//! pool, assigns a filler to every grid cell, tints each assignment toward its
//! target pixel and concatenates the tinted tiles. Each stage runs inside its
//! own tracing span.

use crate::assign::{assign, Strategy};
use crate::exec::DEFAULT_PARALLEL_THRESHOLD;
use crate::mosaic::{assemble, tint_grid};
use crate::pool::FillerPool;
use crate::raster::resize::resize;
use crate::raster::{Raster, Size};
use crate::trace::{trace_event, trace_span};
use crate::util::MosaicResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for a mosaic run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Assignment strategy.
    pub strategy: Strategy,
    /// Grid size: the target is resized to this many cells.
    pub image_size: Size,
    /// Size every filler image is stretched to.
    pub tile_size: Size,
    /// Pools larger than this are normalized in parallel.
    pub parallel_threshold: usize,
    /// Seed for the randomized strategy; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::PixelMean,
            image_size: Size {
                width: 200,
                height: 200,
            },
            tile_size: Size {
                width: 50,
                height: 50,
            },
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            seed: None,
        }
    }
}

impl MosaicConfig {
    /// Returns the random source described by `seed`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Returns the size of the finished mosaic in pixels.
    pub fn output_size(&self) -> Size {
        Size {
            width: self.image_size.width * self.tile_size.width,
            height: self.image_size.height * self.tile_size.height,
        }
    }
}

/// Builds a mosaic of `target` from `fillers` using the random source from `cfg`.
pub fn build_mosaic(target: &Raster, fillers: &[Raster], cfg: &MosaicConfig) -> MosaicResult<Raster> {
    let mut rng = cfg.rng();
    build_mosaic_with_rng(target, fillers, cfg, &mut rng)
}

/// Builds a mosaic with a caller-provided random source.
pub fn build_mosaic_with_rng<R: Rng + ?Sized>(
    target: &Raster,
    fillers: &[Raster],
    cfg: &MosaicConfig,
    rng: &mut R,
) -> MosaicResult<Raster> {
    let _run = trace_span!("build_mosaic", strategy = cfg.strategy.name()).entered();

    let grid_target = {
        let _span = trace_span!("resize_target").entered();
        resize(target, cfg.image_size)?
    };

    let pool = FillerPool::build(fillers, cfg.tile_size, cfg.parallel_threshold)?;

    let assignment = {
        let _span = trace_span!("assign", strategy = cfg.strategy.name()).entered();
        let grid = assign(cfg.strategy, &pool, &grid_target, rng)?;
        trace_event!("assigned", cells = grid.indices().len());
        grid
    };

    let tinted = {
        let _span = trace_span!("tint").entered();
        tint_grid(&assignment, &pool, &grid_target)?
    };

    let _span = trace_span!("assemble").entered();
    let out = assemble(&tinted)?;
    trace_event!("mosaic_built", width = out.width(), height = out.height());
    Ok(out)
}
