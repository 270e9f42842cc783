//! Owned RGB rasters.
//!
//! A `Raster` stores 8-bit RGB pixels interleaved in row-major order with no
//! row padding, so the byte for channel `c` of pixel `(x, y)` lives at
//! `(y * width + x) * 3 + c`. Construction rejects empty rasters and buffers
//! whose length does not match the dimensions; every other operation relies on
//! that invariant.

use crate::util::{MosaicError, MosaicResult};

pub mod io;
pub mod resize;

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 3;

/// Width and height of a raster or tile in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

impl Size {
    /// Creates a size, rejecting zero extents.
    pub fn new(width: usize, height: usize) -> MosaicResult<Self> {
        if width == 0 || height == 0 {
            return Err(MosaicError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Returns the number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Owned, contiguous RGB image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Raster {
    /// Creates a raster from an interleaved RGB buffer.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> MosaicResult<Self> {
        let needed = required_len(width, height)?;
        if data.len() != needed {
            return Err(MosaicError::BufferSizeMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a raster with every pixel set to `color`.
    pub fn filled(size: Size, color: [u8; 3]) -> MosaicResult<Self> {
        let needed = required_len(size.width, size.height)?;
        let mut data = Vec::with_capacity(needed);
        for _ in 0..size.area() {
            data.extend_from_slice(&color);
        }
        Self::new(data, size.width, size.height)
    }

    /// Returns the raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the raster dimensions.
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the interleaved RGB bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the raster and returns its buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * CHANNELS;
        let px = self.data.get(idx..idx + CHANNELS)?;
        Some([px[0], px[1], px[2]])
    }

    /// Returns the bytes of row `y`.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width * CHANNELS;
        let start = y * stride;
        self.data.get(start..start + stride)
    }

    /// Iterates over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
    }

    /// Re-checks the raster invariant.
    ///
    /// Rasters built through this module always pass; the check guards data
    /// that crossed a worker or I/O boundary before it is used by a strategy.
    pub fn validate(&self) -> MosaicResult<()> {
        let needed = required_len(self.width, self.height)?;
        if self.data.len() != needed {
            return Err(MosaicError::BufferSizeMismatch {
                needed,
                got: self.data.len(),
            });
        }
        Ok(())
    }

    /// Copies `tile` into this raster with its top-left corner at `(x0, y0)`.
    pub(crate) fn blit(&mut self, tile: &Raster, x0: usize, y0: usize) -> MosaicResult<()> {
        let end_x = x0.checked_add(tile.width);
        let end_y = y0.checked_add(tile.height);
        match (end_x, end_y) {
            (Some(ex), Some(ey)) if ex <= self.width && ey <= self.height => {}
            _ => return Err(MosaicError::InvalidInput("tile does not fit in the canvas")),
        }

        let dst_stride = self.width * CHANNELS;
        let src_stride = tile.width * CHANNELS;
        for (ty, src) in tile.data.chunks_exact(src_stride).enumerate() {
            let start = (y0 + ty) * dst_stride + x0 * CHANNELS;
            self.data[start..start + src_stride].copy_from_slice(src);
        }
        Ok(())
    }
}

fn required_len(width: usize, height: usize) -> MosaicResult<usize> {
    if width == 0 || height == 0 {
        return Err(MosaicError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or(MosaicError::InvalidDimensions { width, height })
}
