//! Fill strategy contract, runtime dispatch and the fill entry points

use log::debug;

use crate::algorithm::frontier::FrontierFill;
use crate::algorithm::range_span::RangeSpanFill;
use crate::algorithm::recursive::RecursiveFill;
use crate::algorithm::row_span::RowSpanFill;
use crate::algorithm::validation::{FillRequest, Seed, validate, validate_rows};
use crate::io::error::Result;
use crate::spatial::{Color, Grid, Surface};

/// Per-call bookkeeping shared by every strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    /// Cells overwritten with the new color
    pub cells_written: usize,
    /// Largest size reached by the pending-work structure
    ///
    /// Stack length for the span strategies, frontier length for the
    /// breadth-first strategy and recursion depth for the recursive one.
    pub peak_pending: usize,
}

impl Trace {
    /// Record the current size of the pending-work structure
    pub fn observe_pending(&mut self, pending: usize) {
        self.peak_pending = self.peak_pending.max(pending);
    }
}

/// Overwrite one cell and count it
pub(crate) fn paint<S: Surface>(
    surface: &mut S,
    row: usize,
    col: usize,
    color: &S::Color,
    trace: &mut Trace,
) {
    surface.write(row, col, color);
    trace.cells_written += 1;
}

/// A flood fill traversal over a `Surface`
///
/// Implementations replace every cell 4-connected to `seed` through cells
/// equal to `old` with `new`. They may assume the seed holds `old` and
/// that `old != new`; `fill` and `fill_on` guarantee both.
pub trait FillStrategy {
    /// Short identifier used in logs and reports
    fn name(&self) -> &'static str;

    /// Run the traversal from a validated seed
    ///
    /// # Errors
    ///
    /// Only the recursive strategy fails, with `TraversalOverflow`, when
    /// its stack budget runs out.
    fn flood<S: Surface>(
        &self,
        surface: &mut S,
        seed: Seed,
        old: &S::Color,
        new: &S::Color,
        trace: &mut Trace,
    ) -> Result<()>;
}

/// One of the four fill strategies, chosen at runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Depth-first recursion with a stack budget
    Recursive(RecursiveFill),
    /// Breadth-first wave expansion
    Frontier(FrontierFill),
    /// Row runs seeded from an explicit point stack
    RowSpan(RowSpanFill),
    /// Row runs tracked with their parent span
    RangeSpan(RangeSpanFill),
}

impl Strategy {
    /// Every strategy with default settings
    pub const fn all() -> [Self; 4] {
        [
            Self::Recursive(RecursiveFill::new()),
            Self::Frontier(FrontierFill),
            Self::RowSpan(RowSpanFill),
            Self::RangeSpan(RangeSpanFill),
        ]
    }
}

impl FillStrategy for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Self::Recursive(s) => s.name(),
            Self::Frontier(s) => s.name(),
            Self::RowSpan(s) => s.name(),
            Self::RangeSpan(s) => s.name(),
        }
    }

    fn flood<S: Surface>(
        &self,
        surface: &mut S,
        seed: Seed,
        old: &S::Color,
        new: &S::Color,
        trace: &mut Trace,
    ) -> Result<()> {
        match self {
            Self::Recursive(s) => s.flood(surface, seed, old, new, trace),
            Self::Frontier(s) => s.flood(surface, seed, old, new, trace),
            Self::RowSpan(s) => s.flood(surface, seed, old, new, trace),
            Self::RangeSpan(s) => s.flood(surface, seed, old, new, trace),
        }
    }
}

/// Validate a request and fill the grid in place
///
/// Filling a region with its own color is a no-op, not an error.
///
/// # Errors
///
/// Returns a validation error before any write, or `TraversalOverflow`
/// from the recursive strategy after a partial fill
pub fn fill<C: Color, F: FillStrategy>(
    grid: &mut Grid<C>,
    request: &FillRequest<C>,
    strategy: &F,
) -> Result<Trace> {
    let seed = validate(grid, request)?;
    fill_on(grid, seed, &request.color, strategy)
}

/// Fill from an already validated seed
///
/// # Errors
///
/// Propagates `TraversalOverflow` from the recursive strategy
pub fn fill_on<S: Surface, F: FillStrategy>(
    surface: &mut S,
    seed: Seed,
    color: &S::Color,
    strategy: &F,
) -> Result<Trace> {
    let mut trace = Trace::default();
    let Some(old) = surface.read(seed.row, seed.col).cloned() else {
        return Ok(trace);
    };

    if old == *color {
        debug!(
            "{}: seed ({}, {}) already holds {color}, nothing to fill",
            strategy.name(),
            seed.row,
            seed.col
        );
        return Ok(trace);
    }

    strategy.flood(surface, seed, &old, color, &mut trace)?;

    debug!(
        "{}: filled {} cells from ({}, {}), peak pending {}",
        strategy.name(),
        trace.cells_written,
        seed.row,
        seed.col,
        trace.peak_pending
    );
    Ok(trace)
}

/// Fill raw row data and read it back
///
/// Row data is checked against the grid invariants first, so an empty or
/// ragged input is rejected before a grid is built.
///
/// # Errors
///
/// Returns the same errors as `fill`, plus the row shape errors of
/// `validate_rows`
pub fn fill_rows<C: Color, F: FillStrategy>(
    rows: Vec<Vec<C>>,
    request: &FillRequest<C>,
    strategy: &F,
) -> Result<Vec<Vec<C>>> {
    validate_rows(&rows)?;
    let mut grid = Grid::from_rows(rows)?;
    fill(&mut grid, request, strategy)?;
    Ok(grid.to_rows())
}

impl<C: Color> Grid<C> {
    /// Fill the region around (`row`, `col`) with `color`
    ///
    /// # Errors
    ///
    /// See [`fill`]
    pub fn fill<F: FillStrategy>(
        &mut self,
        row: i64,
        col: i64,
        color: C,
        strategy: &F,
    ) -> Result<Trace> {
        fill(self, &FillRequest::new(row, col, color), strategy)
    }
}
