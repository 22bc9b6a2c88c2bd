//! Depth-first recursive fill with a bounded stack budget
//!
//! Neighbors are visited in the fixed order row - 1, row + 1, col - 1,
//! col + 1. A written cell no longer equals the old color, so no visited
//! set is needed and write order is visitation order.

use log::warn;

use crate::algorithm::strategy::{FillStrategy, Trace, paint};
use crate::algorithm::validation::Seed;
use crate::io::configuration::{FALLBACK_STACK_BUDGET, STACK_RED_ZONE};
use crate::io::error::{FillError, Result};
use crate::spatial::Surface;

/// Recursive flood fill
///
/// Before the walk starts, the byte limit is set to the calling thread's
/// remaining stack less `STACK_RED_ZONE`, further capped by the configured
/// budget if there is one. Each frame compares its stack address with the
/// first frame's; once the distance exceeds the limit the traversal
/// unwinds without further writes and reports `TraversalOverflow`. Cells
/// written before that point stay written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecursiveFill {
    stack_budget: Option<usize>,
}

impl RecursiveFill {
    /// Recursive fill limited only by the calling thread's stack
    pub const fn new() -> Self {
        Self { stack_budget: None }
    }

    /// Recursive fill that uses at most `stack_budget` bytes of call stack
    ///
    /// The thread's remaining stack still applies when it is smaller.
    pub const fn with_stack_budget(stack_budget: usize) -> Self {
        Self {
            stack_budget: Some(stack_budget),
        }
    }

    /// Configured stack budget in bytes, if any
    pub const fn stack_budget(&self) -> Option<usize> {
        self.stack_budget
    }

    /// Byte limit for a walk starting on the current thread now
    ///
    /// `FALLBACK_STACK_BUDGET` stands in for the remaining stack on
    /// platforms where it cannot be measured.
    pub fn effective_budget(&self) -> usize {
        let available = stacker::remaining_stack()
            .unwrap_or(FALLBACK_STACK_BUDGET + STACK_RED_ZONE)
            .saturating_sub(STACK_RED_ZONE);
        self.stack_budget
            .map_or(available, |budget| budget.min(available))
    }
}

impl FillStrategy for RecursiveFill {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn flood<S: Surface>(
        &self,
        surface: &mut S,
        seed: Seed,
        old: &S::Color,
        new: &S::Color,
        trace: &mut Trace,
    ) -> Result<()> {
        let (rows, cols) = surface.dimensions();
        let budget = self.effective_budget();
        let mut walk = Walk {
            surface,
            old,
            new,
            trace,
            rows,
            cols,
            base: stack_address(),
            budget,
        };

        if walk.visit(seed.row, seed.col, 1).is_err() {
            let filled = walk.trace.cells_written;
            warn!(
                "recursive fill from ({}, {}) ran out of its {budget} byte stack budget after {filled} cells; grid is partially filled",
                seed.row, seed.col
            );
            return Err(FillError::TraversalOverflow {
                stack_budget: budget,
                filled,
            });
        }
        Ok(())
    }
}

struct Overflow;

struct Walk<'a, S: Surface> {
    surface: &'a mut S,
    old: &'a S::Color,
    new: &'a S::Color,
    trace: &'a mut Trace,
    rows: usize,
    cols: usize,
    base: usize,
    budget: usize,
}

impl<S: Surface> Walk<'_, S> {
    fn visit(&mut self, row: usize, col: usize, depth: usize) -> std::result::Result<(), Overflow> {
        if stack_address().abs_diff(self.base) > self.budget {
            return Err(Overflow);
        }

        if !self.surface.holds(row, col, self.old) {
            return Ok(());
        }
        paint(&mut *self.surface, row, col, self.new, &mut *self.trace);
        self.trace.observe_pending(depth);

        if row > 0 {
            self.visit(row - 1, col, depth + 1)?;
        }
        if row + 1 < self.rows {
            self.visit(row + 1, col, depth + 1)?;
        }
        if col > 0 {
            self.visit(row, col - 1, depth + 1)?;
        }
        if col + 1 < self.cols {
            self.visit(row, col + 1, depth + 1)?;
        }
        Ok(())
    }
}

// Address of a local in the caller's frame
#[inline(always)]
fn stack_address() -> usize {
    let marker = 0_u8;
    std::ptr::from_ref(std::hint::black_box(&marker)).addr()
}
