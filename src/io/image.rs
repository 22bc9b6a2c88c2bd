//! Conversion between raster images and color grids
//!
//! Image rows become grid rows, so a pixel at (x, y) lands at grid
//! position (row = y, col = x).

use std::path::Path;

use image::{ImageBuffer, Luma};
use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{FillError, Result, WithPath, invalid_parameter};
use crate::spatial::Grid;

/// Load one RGBA channel of an image as a grid
///
/// Grayscale images expand to equal R, G and B channels with an opaque
/// alpha channel.
///
/// # Errors
///
/// Returns an error if:
/// - The channel index is not 0 to 3
/// - The file cannot be opened or decoded
/// - Either image dimension is zero or exceeds `MAX_GRID_DIMENSION`
pub fn load_channel(path: &Path, channel: usize) -> Result<Grid<u8>> {
    if channel > 3 {
        return Err(invalid_parameter(
            "channel",
            &channel,
            &"must be 0 (red), 1 (green), 2 (blue) or 3 (alpha)",
        ));
    }

    let image = image::open(path).with_path(path)?.to_rgba8();
    let (width, height) = image.dimensions();
    let (rows, cols) = (height as usize, width as usize);

    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "image",
            &format!("{rows}x{cols}"),
            &format!("dimensions must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }

    let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
        image
            .get_pixel_checked(col as u32, row as u32)
            .and_then(|pixel| pixel.0.get(channel).copied())
            .unwrap_or(0)
    });

    Grid::from_array(cells)
}

/// Save a grid as an 8-bit grayscale image
///
/// # Errors
///
/// Returns an error if:
/// - The grid is too large for an image
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_grayscale(grid: &Grid<u8>, path: &Path) -> Result<()> {
    let (rows, cols) = grid.dimensions();
    let too_large = |_e| invalid_parameter("grid", &format!("{rows}x{cols}"), &"too large for an image");
    let width = u32::try_from(cols).map_err(too_large)?;
    let height = u32::try_from(rows).map_err(too_large)?;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Luma([grid.get(y as usize, x as usize).copied().unwrap_or(0)])
    });

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FillError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| FillError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
