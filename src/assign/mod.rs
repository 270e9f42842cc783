//! Filler-to-pixel assignment.
//!
//! An [`AssignmentGrid`] maps every target pixel `(x, y)` to an index into the
//! filler pool. All strategies address the target the same way: `x` is the
//! column, `y` the row, and the raster-scan position of a cell is
//! `y * width + x`.

pub mod nearest;
mod scan;

use crate::pool::FillerPool;
use crate::raster::Raster;
use crate::util::math::rgb_to_f64;
use crate::util::{MosaicError, MosaicResult};
use nearest::{argmin, choose_uniform, color_distances, default_rank, nearest_k};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of nearest candidates the randomized strategy draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RankWindow {
    /// `ceil(24 / 1117 * pool_len + 5)`.
    #[default]
    Auto,
    /// A fixed candidate count (must be at least one).
    Fixed(usize),
}

impl RankWindow {
    /// Resolves the window for a pool of `pool_len` entries, capped at the pool size.
    pub fn resolve(self, pool_len: usize) -> MosaicResult<usize> {
        let k = match self {
            RankWindow::Auto => default_rank(pool_len),
            RankWindow::Fixed(0) => {
                return Err(MosaicError::InvalidArgument("rank window must be at least 1"))
            }
            RankWindow::Fixed(k) => k,
        };
        Ok(k.min(pool_len))
    }
}

/// Assignment strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Nearest mean color, lowest index on ties.
    #[default]
    PixelMean,
    /// Uniform choice among the nearest mean colors.
    PixelMeanRandom(RankWindow),
    /// One pool entry per pixel in raster-scan order.
    Straight,
    /// The pool repeated cyclically in raster-scan order.
    Duplication,
}

impl Strategy {
    /// Returns the configuration name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::PixelMean => "pixel_mean",
            Strategy::PixelMeanRandom(_) => "pixel_mean_random",
            Strategy::Straight => "straight",
            Strategy::Duplication => "duplication",
        }
    }

    /// Replaces the rank window of `PixelMeanRandom`; other strategies are unchanged.
    pub fn with_rank_window(self, window: RankWindow) -> Self {
        match self {
            Strategy::PixelMeanRandom(_) => Strategy::PixelMeanRandom(window),
            other => other,
        }
    }
}

impl FromStr for Strategy {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pixel_mean" => Ok(Strategy::PixelMean),
            "pixel_mean_random" => Ok(Strategy::PixelMeanRandom(RankWindow::Auto)),
            "straight" => Ok(Strategy::Straight),
            "duplication" => Ok(Strategy::Duplication),
            other => Err(MosaicError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pool index chosen for every target pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentGrid {
    width: usize,
    height: usize,
    indices: Vec<usize>,
}

impl AssignmentGrid {
    /// Returns the grid width (target columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height (target rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pool index assigned to pixel `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.indices.get(y * self.width + x).copied()
    }

    /// Returns the pool indices in raster-scan order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Resolves every cell to its pool raster, in raster-scan order.
    pub fn resolve<'a>(&self, pool: &'a FillerPool) -> MosaicResult<Vec<&'a Raster>> {
        self.indices
            .iter()
            .map(|&idx| {
                pool.get(idx)
                    .ok_or(MosaicError::InvalidInput("assignment refers outside the pool"))
            })
            .collect()
    }
}

/// Assigns a pool entry to every pixel of `target`.
///
/// `target` must already be resized to the mosaic grid size. Inputs are
/// validated before any assignment work starts. `rng` is only used by
/// `PixelMeanRandom`.
pub fn assign<R: Rng + ?Sized>(
    strategy: Strategy,
    pool: &FillerPool,
    target: &Raster,
    rng: &mut R,
) -> MosaicResult<AssignmentGrid> {
    pool.validate()?;
    target.validate()?;

    let width = target.width();
    let height = target.height();
    let cells = width * height;

    let indices = match strategy {
        Strategy::Straight => scan::straight(pool.len(), cells)?,
        Strategy::Duplication => scan::duplication(pool.len(), cells)?,
        Strategy::PixelMean => {
            let means = pool.means().as_slice();
            target
                .pixels()
                .map(|px| {
                    argmin(&color_distances(means, rgb_to_f64(px)))
                        .ok_or(MosaicError::EmptyPool)
                })
                .collect::<MosaicResult<Vec<_>>>()?
        }
        Strategy::PixelMeanRandom(window) => {
            let k = window.resolve(pool.len())?;
            let means = pool.means().as_slice();
            let mut indices = Vec::with_capacity(cells);
            for px in target.pixels() {
                let distances = color_distances(means, rgb_to_f64(px));
                let candidates = nearest_k(&distances, k);
                indices.push(choose_uniform(&candidates, rng).ok_or(MosaicError::EmptyPool)?);
            }
            indices
        }
    };

    Ok(AssignmentGrid {
        width,
        height,
        indices,
    })
}
