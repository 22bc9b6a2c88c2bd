//! Seeded random grids for exercising strategies without an input image

use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{MAX_GRID_DIMENSION, SYNTHETIC_BACKGROUND, SYNTHETIC_FOREGROUND};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Grid;

/// Generate a two-color noise grid
///
/// Each cell is independently `SYNTHETIC_FOREGROUND` with probability
/// `density`, otherwise `SYNTHETIC_BACKGROUND`. The same seed always
/// yields the same grid.
///
/// # Errors
///
/// Returns an error if the density is outside [0, 1] or a dimension is
/// zero or exceeds `MAX_GRID_DIMENSION`
pub fn noise(rows: usize, cols: usize, density: f64, seed: u64) -> Result<Grid<u8>> {
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must be between 0 and 1",
        ));
    }
    check_dimension("rows", rows)?;
    check_dimension("cols", cols)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let cells = Array2::from_shape_simple_fn((rows, cols), || {
        if rng.random_bool(density) {
            SYNTHETIC_FOREGROUND
        } else {
            SYNTHETIC_BACKGROUND
        }
    });

    Grid::from_array(cells)
}

/// Parse a `HxW` dimension string such as `512x768`
///
/// # Errors
///
/// Returns an error if the text is not two positive integers separated by `x`
pub fn parse_dimensions(raw: &str) -> Result<(usize, usize)> {
    let malformed = || invalid_parameter("dimensions", &raw, &"expected HxW, e.g. 512x512");

    let (rows, cols) = raw
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(malformed)?;
    let rows = rows.trim().parse::<usize>().map_err(|_e| malformed())?;
    let cols = cols.trim().parse::<usize>().map_err(|_e| malformed())?;

    check_dimension("rows", rows)?;
    check_dimension("cols", cols)?;
    Ok((rows, cols))
}

fn check_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
