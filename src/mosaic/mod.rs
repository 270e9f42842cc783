//! Tinting and tiled reassembly.
//!
//! A tile grid is a slice of lines where `grid[i][j]` is drawn with its
//! top-left corner at `(i * tile_width, j * tile_height)`: the outer index
//! walks the horizontal axis and the inner index the vertical axis. Each inner
//! vector is therefore one column of the mosaic, top to bottom.

use crate::assign::AssignmentGrid;
use crate::color::project_in_place;
use crate::pool::FillerPool;
use crate::raster::{Raster, Size};
use crate::util::math::rgb_to_f64;
use crate::util::{MosaicError, MosaicResult};

/// Tints every assigned tile toward its target pixel.
///
/// Returns a grid indexed `[x][y]` in the layout [`assemble`] expects.
pub fn tint_grid(
    assignment: &AssignmentGrid,
    pool: &FillerPool,
    target: &Raster,
) -> MosaicResult<Vec<Vec<Raster>>> {
    if assignment.width() != target.width() || assignment.height() != target.height() {
        return Err(MosaicError::InvalidInput(
            "assignment grid does not match the target size",
        ));
    }

    let mut grid = Vec::with_capacity(assignment.width());
    for x in 0..assignment.width() {
        let mut line = Vec::with_capacity(assignment.height());
        for y in 0..assignment.height() {
            let (idx, px) = assignment
                .get(x, y)
                .zip(target.get(x, y))
                .ok_or(MosaicError::InvalidInput("grid cell out of bounds"))?;
            let mut tile = pool
                .get(idx)
                .ok_or(MosaicError::InvalidInput("assignment refers outside the pool"))?
                .clone();
            project_in_place(&mut tile, rgb_to_f64(px));
            line.push(tile);
        }
        grid.push(line);
    }
    Ok(grid)
}

/// Concatenates a tile grid into one raster.
///
/// All lines must have the same length and all tiles the size of
/// `grid[0][0]`. The output is `grid.len() * tile_width` wide and
/// `grid[0].len() * tile_height` tall.
pub fn assemble(grid: &[Vec<Raster>]) -> MosaicResult<Raster> {
    let first_line = grid.first().ok_or(MosaicError::EmptyGrid)?;
    let tile = first_line.first().ok_or(MosaicError::EmptyGrid)?.size();
    let line_len = first_line.len();

    for (i, line) in grid.iter().enumerate() {
        if line.len() != line_len {
            return Err(MosaicError::RaggedGrid {
                line: i,
                expected: line_len,
                got: line.len(),
            });
        }
        for (j, raster) in line.iter().enumerate() {
            if raster.size() != tile {
                return Err(MosaicError::TileSizeMismatch {
                    i,
                    j,
                    width: tile.width,
                    height: tile.height,
                    got_width: raster.width(),
                    got_height: raster.height(),
                });
            }
        }
    }

    let out_size = Size::new(grid.len() * tile.width, line_len * tile.height)?;
    let mut out = Raster::filled(out_size, [0, 0, 0])?;
    for (i, line) in grid.iter().enumerate() {
        for (j, raster) in line.iter().enumerate() {
            out.blit(raster, i * tile.width, j * tile.height)?;
        }
    }
    Ok(out)
}
