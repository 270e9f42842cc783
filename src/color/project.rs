//! Per-channel tint projection.
//!
//! Each channel is scaled by `target / 255`. Ratios above one amplify the
//! channel; the float-to-u8 cast truncates toward zero and saturates at 0 and
//! 255, and is the only clipping step.

use crate::raster::{Raster, CHANNELS};

/// Returns the per-channel scale factors for `color`.
pub fn tint_ratios(color: [f64; 3]) -> [f64; 3] {
    color.map(|c| c / 255.0)
}

/// Returns a copy of `raster` tinted toward `color`.
pub fn project(raster: &Raster, color: [f64; 3]) -> Raster {
    let mut out = raster.clone();
    project_in_place(&mut out, color);
    out
}

/// Tints `raster` toward `color` in place.
pub fn project_in_place(raster: &mut Raster, color: [f64; 3]) {
    let ratios = tint_ratios(color);
    for px in raster.data_mut().chunks_exact_mut(CHANNELS) {
        for (value, ratio) in px.iter_mut().zip(ratios) {
            *value = (f64::from(*value) * ratio) as u8;
        }
    }
}
