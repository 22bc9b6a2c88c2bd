//! Fill request validation
//!
//! Every check runs to completion before a strategy touches the grid, so a
//! rejected request never leaves a partial write behind.

use crate::io::error::{FillError, Result};
use crate::spatial::{Color, Grid};

/// A fill request as supplied by the caller
///
/// Coordinates are signed so that negative input reaches the bounds check
/// instead of wrapping. The color may differ in kind from the grid cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillRequest<C> {
    /// Row of the seed cell
    pub row: i64,
    /// Column of the seed cell
    pub col: i64,
    /// Replacement color
    pub color: C,
}

impl<C> FillRequest<C> {
    /// Create a request from integer coordinates
    pub const fn new(row: i64, col: i64, color: C) -> Self {
        Self { row, col, color }
    }

    /// Create a request from textual coordinates
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeedType` if either coordinate is not an integer
    pub fn parse(row: &str, col: &str, color: C) -> Result<Self> {
        Ok(Self::new(parse_coordinate(row)?, parse_coordinate(col)?, color))
    }
}

/// Seed position known to lie inside the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed {
    /// Seed row
    pub row: usize,
    /// Seed column
    pub col: usize,
}

/// Parse a seed coordinate from text
///
/// # Errors
///
/// Returns `InvalidSeedType` if the text is not an integer
pub fn parse_coordinate(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_e| FillError::InvalidSeedType {
            raw: raw.to_string(),
        })
}

/// Convert a floating point coordinate
///
/// # Errors
///
/// Returns `InvalidSeedType` for fractional, non-finite or out of range values
pub fn coordinate_from_f64(value: f64) -> Result<i64> {
    // 2^63 is exactly representable, i64::MAX is not
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if value.is_finite() && value.fract() == 0.0 && value >= -LIMIT && value < LIMIT {
        Ok(value as i64)
    } else {
        Err(FillError::InvalidSeedType {
            raw: value.to_string(),
        })
    }
}

/// Check a request against a grid without modifying it
///
/// Checks run in order: seed bounds, then cell homogeneity, which scans
/// every cell. Grid extent needs no check here since every `Grid`
/// constructor rejects empty shapes; raw rows get theirs in
/// `validate_rows`.
///
/// # Errors
///
/// Returns `InvalidSeedBounds` or `InconsistentCellTypes`
pub fn validate<C: Color>(grid: &Grid<C>, request: &FillRequest<C>) -> Result<Seed> {
    let (rows, cols) = grid.dimensions();

    let row = usize::try_from(request.row).ok().filter(|&r| r < rows);
    let col = usize::try_from(request.col).ok().filter(|&c| c < cols);
    let (Some(row), Some(col)) = (row, col) else {
        return Err(FillError::InvalidSeedBounds {
            row: request.row,
            col: request.col,
            dimensions: (rows, cols),
        });
    };

    check_cell_kinds(grid.cells())?;

    Ok(Seed { row, col })
}

/// Check raw row data against the grid invariants
///
/// # Errors
///
/// Returns `EmptyGrid`, `InconsistentRowLengths` or `InconsistentCellTypes`
pub fn validate_rows<C: Color>(rows: &[Vec<C>]) -> Result<()> {
    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(FillError::EmptyGrid);
    }

    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != width {
            return Err(FillError::InconsistentRowLengths {
                row,
                expected: width,
                found: cells.len(),
            });
        }
    }

    check_cell_kinds(rows.iter().enumerate().flat_map(|(row, cells)| {
        cells
            .iter()
            .enumerate()
            .map(move |(col, cell)| ((row, col), cell))
    }))
}

/// Confirm every cell shares the kind of the first one
///
/// # Errors
///
/// Returns `InconsistentCellTypes` at the first mismatching cell
pub fn check_cell_kinds<'a, C: Color + 'a>(
    cells: impl IntoIterator<Item = ((usize, usize), &'a C)>,
) -> Result<()> {
    let mut cells = cells.into_iter();
    let Some((_, first)) = cells.next() else {
        return Ok(());
    };
    let expected = first.kind();

    match cells.find(|(_, cell)| cell.kind() != expected) {
        Some(((row, col), cell)) => Err(FillError::InconsistentCellTypes {
            row,
            col,
            expected,
            found: cell.kind(),
        }),
        None => Ok(()),
    }
}
