//! Loading, saving and displaying rasters via the `image` crate.
//!
//! Every decoded image is normalized to 8-bit RGB. Directory enumeration only
//! considers extensions the enabled codecs can decode.

use crate::raster::Raster;
use crate::util::{MosaicError, MosaicResult};
use image::{DynamicImage, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// File extensions picked up by [`load_all`] (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

impl Raster {
    /// Creates a raster from an RGB image buffer.
    pub fn from_rgb_image(img: RgbImage) -> MosaicResult<Self> {
        let width = img.width() as usize;
        let height = img.height() as usize;
        Raster::new(img.into_raw(), width, height)
    }

    /// Creates a raster from any decoded image, converting it to RGB.
    pub fn from_dynamic_image(img: &DynamicImage) -> MosaicResult<Self> {
        Self::from_rgb_image(img.to_rgb8())
    }

    /// Converts the raster into an RGB image buffer.
    pub fn to_rgb_image(&self) -> MosaicResult<RgbImage> {
        let width = u32::try_from(self.width())
            .map_err(|_| MosaicError::InvalidArgument("raster width exceeds u32"))?;
        let height = u32::try_from(self.height())
            .map_err(|_| MosaicError::InvalidArgument("raster height exceeds u32"))?;
        RgbImage::from_raw(width, height, self.data().to_vec()).ok_or(
            MosaicError::BufferSizeMismatch {
                needed: self.width() * self.height() * 3,
                got: self.data().len(),
            },
        )
    }
}

/// Loads an image from disk and converts it to RGB.
pub fn load<P: AsRef<Path>>(path: P) -> MosaicResult<Raster> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(MosaicError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let img = image::open(path).map_err(|err| MosaicError::Decode {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    Raster::from_dynamic_image(&img)
}

/// Lists the image files in `dir` with a supported extension, sorted by path.
pub fn list_images<P: AsRef<Path>>(dir: P) -> MosaicResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => MosaicError::NotFound {
            path: dir.to_path_buf(),
        },
        _ => MosaicError::Io {
            path: dir.to_path_buf(),
            reason: err.to_string(),
        },
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| MosaicError::Io {
            path: dir.to_path_buf(),
            reason: err.to_string(),
        })?;
        let path = entry.path();
        if path.is_file() && has_supported_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Loads every supported image in `dir`.
///
/// Fails with `NotFound` when the directory contains no supported image and
/// with the first decode error otherwise.
pub fn load_all<P: AsRef<Path>>(dir: P) -> MosaicResult<Vec<Raster>> {
    let dir = dir.as_ref();
    let paths = list_images(dir)?;
    if paths.is_empty() {
        return Err(MosaicError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    paths.iter().map(load).collect()
}

/// Encodes the raster to `path`; the format follows the file extension.
pub fn save<P: AsRef<Path>>(raster: &Raster, path: P) -> MosaicResult<()> {
    let path = path.as_ref();
    raster
        .to_rgb_image()?
        .save(path)
        .map_err(|err| MosaicError::Encode {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
}

/// Writes the raster to a temporary PNG and opens it in the system viewer.
///
/// Returns the path of the written file. The viewer is spawned without
/// waiting for it to exit.
pub fn show(raster: &Raster) -> MosaicResult<PathBuf> {
    let path = std::env::temp_dir().join(format!("tintmosaic-{}.png", std::process::id()));
    save(raster, &path)?;
    viewer_command(&path)
        .spawn()
        .map_err(|err| MosaicError::Io {
            path: path.clone(),
            reason: err.to_string(),
        })?;
    Ok(path)
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}
