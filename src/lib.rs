//! tintmosaic builds photo-mosaics from a target image and a pool of filler images.
//!
//! Every pixel of the (resized) target is replaced by a filler image chosen by
//! an assignment strategy, tinted toward the exact pixel color, and the tinted
//! tiles are concatenated into one output raster. Pool normalization runs in
//! parallel via the `rayon` feature; stage spans are emitted with the
//! `tracing` feature.

pub mod aspect;
pub mod assign;
pub mod color;
pub mod exec;
pub mod mosaic;
pub mod pipeline;
pub mod pool;
pub mod raster;
mod trace;
pub mod util;

pub use aspect::{AspectChoice, AspectProposal};
pub use assign::{assign, AssignmentGrid, RankWindow, Strategy};
pub use color::{mean_color, project, project_in_place, MeanColors};
pub use exec::{Executor, DEFAULT_PARALLEL_THRESHOLD};
pub use mosaic::{assemble, tint_grid};
pub use pipeline::{build_mosaic, build_mosaic_with_rng, MosaicConfig};
pub use pool::{normalize, normalize_with, FillerPool};
pub use raster::{Raster, Size};
pub use util::{ErrorKind, MosaicError, MosaicResult};
