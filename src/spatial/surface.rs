//! Cell access seam between strategies and grid storage

use std::cell::Cell;

use crate::spatial::color::Color;
use crate::spatial::grid::Grid;

/// Read/write access to a rectangular color buffer
///
/// Fill strategies are written against this trait so that access
/// counting can be layered on without touching the uninstrumented path.
pub trait Surface {
    /// Color type stored in each cell
    type Color: Color;

    /// Buffer dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Color at a position, or `None` outside the buffer
    fn read(&self, row: usize, col: usize) -> Option<&Self::Color>;

    /// Overwrite a position; positions outside the buffer are ignored
    fn write(&mut self, row: usize, col: usize, color: &Self::Color);

    /// Whether a position exists and currently holds `color`
    fn holds(&self, row: usize, col: usize, color: &Self::Color) -> bool {
        self.read(row, col).is_some_and(|cell| cell == color)
    }
}

impl<C: Color> Surface for Grid<C> {
    type Color = C;

    fn dimensions(&self) -> (usize, usize) {
        Self::dimensions(self)
    }

    fn read(&self, row: usize, col: usize) -> Option<&C> {
        self.get(row, col)
    }

    fn write(&mut self, row: usize, col: usize, color: &C) {
        self.set(row, col, color.clone());
    }
}

/// Grid wrapper that counts every cell read and write
#[derive(Debug)]
pub struct CountingSurface<'a, C> {
    grid: &'a mut Grid<C>,
    reads: Cell<u64>,
    writes: u64,
}

impl<'a, C: Color> CountingSurface<'a, C> {
    /// Start counting accesses to `grid`
    pub const fn new(grid: &'a mut Grid<C>) -> Self {
        Self {
            grid,
            reads: Cell::new(0),
            writes: 0,
        }
    }

    /// Cell reads so far
    pub fn reads(&self) -> u64 {
        self.reads.get()
    }

    /// Cell writes so far
    pub const fn writes(&self) -> u64 {
        self.writes
    }
}

impl<C: Color> Surface for CountingSurface<'_, C> {
    type Color = C;

    fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    fn read(&self, row: usize, col: usize) -> Option<&C> {
        self.reads.set(self.reads.get() + 1);
        self.grid.get(row, col)
    }

    fn write(&mut self, row: usize, col: usize, color: &C) {
        self.writes += 1;
        self.grid.set(row, col, color.clone());
    }
}
