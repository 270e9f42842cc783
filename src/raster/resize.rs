//! Stretch resizing backed by `image::imageops`.
//!
//! Rasters are resized to an exact target size without preserving the aspect
//! ratio. Resampling uses the Catmull-Rom (bicubic) filter.

use crate::raster::{Raster, Size};
use crate::util::{MosaicError, MosaicResult};
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgb};

/// Filter used for every resize in the pipeline.
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Returns a copy of `src` stretched to `size`.
pub fn resize(src: &Raster, size: Size) -> MosaicResult<Raster> {
    let size = Size::new(size.width, size.height)?;
    let (src_w, src_h) = (to_u32(src.width())?, to_u32(src.height())?);
    let (dst_w, dst_h) = (to_u32(size.width)?, to_u32(size.height)?);

    let view: ImageBuffer<Rgb<u8>, &[u8]> = ImageBuffer::from_raw(src_w, src_h, src.data())
        .ok_or(MosaicError::BufferSizeMismatch {
            needed: src.width() * src.height() * 3,
            got: src.data().len(),
        })?;
    let resized = imageops::resize(&view, dst_w, dst_h, RESIZE_FILTER);
    Raster::new(resized.into_raw(), size.width, size.height)
}

fn to_u32(value: usize) -> MosaicResult<u32> {
    u32::try_from(value).map_err(|_| MosaicError::InvalidArgument("dimension exceeds u32"))
}
