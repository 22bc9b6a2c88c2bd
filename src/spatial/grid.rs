//! Rectangular color grid with row-major (row, column) addressing
//!
//! The first coordinate selects a row and the second a position within
//! that row. Scan-based strategies treat the column axis as horizontal.

use std::fmt;

use ndarray::Array2;

use crate::io::error::{FillError, Result, invalid_parameter};
use crate::spatial::color::Color;

/// Owned 2D color buffer that fills mutate in place
///
/// A grid always has at least one row and one column; constructors
/// reject anything else. Reads outside the grid return `None` and
/// writes outside it are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<C> {
    cells: Array2<C>,
}

impl<C: Color> Grid<C> {
    /// Build a grid from caller-supplied rows
    ///
    /// # Errors
    ///
    /// Returns `EmptyGrid` if there are no rows or the first row is empty,
    /// and `InconsistentRowLengths` if any row differs from the first.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(FillError::EmptyGrid);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(FillError::InconsistentRowLengths {
                row,
                expected: width,
                found,
            });
        }

        let height = rows.len();
        let flat: Vec<C> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|e| invalid_parameter("rows", &format!("{height}x{width}"), &e))?;

        Ok(Self { cells })
    }

    /// Wrap an existing array
    ///
    /// # Errors
    ///
    /// Returns `EmptyGrid` if either dimension is zero
    pub fn from_array(cells: Array2<C>) -> Result<Self> {
        if cells.is_empty() {
            return Err(FillError::EmptyGrid);
        }
        Ok(Self { cells })
    }

    /// Create a grid where every cell holds the same color
    ///
    /// # Errors
    ///
    /// Returns `EmptyGrid` if either dimension is zero
    pub fn uniform(rows: usize, cols: usize, color: C) -> Result<Self> {
        Self::from_array(Array2::from_elem((rows, cols), color))
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Color at a position, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<&C> {
        self.cells.get([row, col])
    }

    /// Overwrite the color at a position; positions outside the grid are ignored
    pub fn set(&mut self, row: usize, col: usize, color: C) {
        if let Some(cell) = self.cells.get_mut([row, col]) {
            *cell = color;
        }
    }

    /// Iterate cells in row-major order with their coordinates
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &C)> {
        self.cells.indexed_iter()
    }

    /// Copy the grid out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<C>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Borrow the underlying array
    pub const fn as_array(&self) -> &Array2<C> {
        &self.cells
    }
}

impl<C: Color> fmt::Display for Grid<C> {
    /// Canonical form: rows joined by newlines, cells concatenated
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
