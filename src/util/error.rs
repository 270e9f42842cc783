//! Error types for tintmosaic.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for tintmosaic operations.
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Coarse classification of [`MosaicError`] variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or empty raster, or a pool element violating raster invariants.
    InvalidInput,
    /// Unknown strategy name or an unmet strategy precondition.
    InvalidArgument,
    /// Ragged grid or inconsistent tile size at assembly time.
    DimensionMismatch,
    /// A file or directory did not yield any image.
    NotFound,
    /// Image decoding or encoding failed.
    Decode,
    /// Other filesystem or process failures.
    Io,
}

/// Errors that can occur while building a mosaic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MosaicError {
    /// The input data is invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Width or height is zero or overflows.
    #[error("invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Pixel buffer length does not match the raster dimensions.
    #[error("pixel buffer has {got} bytes, expected {needed}")]
    BufferSizeMismatch { needed: usize, got: usize },
    /// A filler pool element failed validation.
    #[error("filler image {index} is malformed: {reason}")]
    MalformedPoolEntry { index: usize, reason: &'static str },
    /// The filler pool has no images.
    #[error("filler pool is empty")]
    EmptyPool,
    /// A parameter is outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The strategy name is not recognised.
    #[error(
        "unknown strategy '{0}' (expected one of pixel_mean, pixel_mean_random, straight, duplication)"
    )]
    UnknownStrategy(String),
    /// The filler pool size does not match what the strategy requires.
    #[error("strategy '{strategy}' requires {expected} filler images, got {got}")]
    PoolSizeMismatch {
        strategy: &'static str,
        expected: usize,
        got: usize,
    },
    /// The tile grid has no cells.
    #[error("tile grid is empty")]
    EmptyGrid,
    /// A grid line has a different length than the first one.
    #[error("grid line {line} has {got} tiles, expected {expected}")]
    RaggedGrid {
        line: usize,
        expected: usize,
        got: usize,
    },
    /// A tile does not share the grid's tile size.
    #[error("tile ({i}, {j}) is {got_width}x{got_height}, expected {width}x{height}")]
    TileSizeMismatch {
        i: usize,
        j: usize,
        width: usize,
        height: usize,
        got_width: usize,
        got_height: usize,
    },
    /// No image was found at the given location.
    #[error("no image found at '{}'", path.display())]
    NotFound { path: PathBuf },
    /// Decoding an image file failed.
    #[error("failed to decode '{}': {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    /// Encoding an image file failed.
    #[error("failed to encode '{}': {reason}", path.display())]
    Encode { path: PathBuf, reason: String },
    /// Filesystem or process failure.
    #[error("i/o error on '{}': {reason}", path.display())]
    Io { path: PathBuf, reason: String },
}

impl MosaicError {
    /// Returns the taxonomy bucket for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_)
            | Self::InvalidDimensions { .. }
            | Self::BufferSizeMismatch { .. }
            | Self::MalformedPoolEntry { .. }
            | Self::EmptyPool => ErrorKind::InvalidInput,
            Self::InvalidArgument(_)
            | Self::UnknownStrategy(_)
            | Self::PoolSizeMismatch { .. } => ErrorKind::InvalidArgument,
            Self::EmptyGrid | Self::RaggedGrid { .. } | Self::TileSizeMismatch { .. } => {
                ErrorKind::DimensionMismatch
            }
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Decode { .. } | Self::Encode { .. } => ErrorKind::Decode,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}
