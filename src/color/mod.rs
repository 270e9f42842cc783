//! Color sampling and tint projection.

mod project;

pub use project::{project, project_in_place, tint_ratios};

use crate::exec::Executor;
use crate::raster::Raster;
use crate::util::MosaicResult;

/// Returns the per-channel arithmetic mean over all pixels of `raster`.
pub fn mean_color(raster: &Raster) -> [f64; 3] {
    let mut sums = [0u64; 3];
    for px in raster.pixels() {
        sums[0] += u64::from(px[0]);
        sums[1] += u64::from(px[1]);
        sums[2] += u64::from(px[2]);
    }
    let n = (raster.width() * raster.height()) as f64;
    sums.map(|s| s as f64 / n)
}

/// Mean colors positionally aligned with a filler pool.
#[derive(Clone, Debug, PartialEq)]
pub struct MeanColors {
    colors: Vec<[f64; 3]>,
}

impl MeanColors {
    /// Computes the mean color of every raster, in input order.
    pub fn compute(rasters: &[Raster], executor: Executor) -> MosaicResult<Self> {
        let colors = executor.try_map(rasters, |raster| Ok(mean_color(raster)))?;
        Ok(Self { colors })
    }

    /// Wraps precomputed colors.
    pub fn from_vec(colors: Vec<[f64; 3]>) -> Self {
        Self { colors }
    }

    /// Returns the mean color of pool entry `index`.
    pub fn get(&self, index: usize) -> Option<[f64; 3]> {
        self.colors.get(index).copied()
    }

    /// Returns the number of cached colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the cached colors as a slice.
    pub fn as_slice(&self) -> &[[f64; 3]] {
        &self.colors
    }
}
