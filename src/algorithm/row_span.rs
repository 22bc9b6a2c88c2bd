//! Scanline fill driven by a stack of seed points
//!
//! A popped point is widened to the full run of old-colored cells on its
//! row, and the run is written left to right. While writing, the cells
//! directly above and below are checked; only the first old-colored cell of
//! each vertical neighbor run is pushed, tracked by the `above` and `below`
//! flags, which reset on any cell that does not match.

use crate::algorithm::strategy::{FillStrategy, Trace, paint};
use crate::algorithm::validation::Seed;
use crate::io::error::Result;
use crate::spatial::Surface;

/// Row-run fill with one pending point per discovered neighbor run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowSpanFill;

impl FillStrategy for RowSpanFill {
    fn name(&self) -> &'static str {
        "row-span"
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
        let mut stack = vec![(seed.row, seed.col)];
        trace.observe_pending(stack.len());

        while let Some((row, col)) = stack.pop() {
            // Already covered by a run filled after this point was pushed
            if !surface.holds(row, col, old) {
                continue;
            }

            let mut start = col;
            while start > 0 && surface.holds(row, start - 1, old) {
                start -= 1;
            }

            let mut above = false;
            let mut below = false;
            let mut current = start;

            while current < cols && surface.holds(row, current, old) {
                paint(surface, row, current, new, trace);

                if row > 0 {
                    above = mark_neighbor(surface, &mut stack, (row - 1, current), old, above);
                }
                if row + 1 < rows {
                    below = mark_neighbor(surface, &mut stack, (row + 1, current), old, below);
                }

                current += 1;
            }

            trace.observe_pending(stack.len());
        }

        Ok(())
    }
}

/// Push the first cell of a neighbor run and report whether a run is open
fn mark_neighbor<S: Surface>(
    surface: &S,
    stack: &mut Vec<(usize, usize)>,
    position: (usize, usize),
    old: &S::Color,
    run_open: bool,
) -> bool {
    if !surface.holds(position.0, position.1, old) {
        return false;
    }
    if !run_open {
        stack.push(position);
    }
    true
}
