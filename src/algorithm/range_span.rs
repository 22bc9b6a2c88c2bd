//! Scanline fill with parent-span tracking
//!
//! Pending work is a stack of filled runs, each remembering the run on the
//! neighboring row it was discovered from and the direction it grew in.
//! A popped span scans the next row onward across its own width, and
//! scans back toward its parent's row only where it overhangs the parent.
//! Cells the parent already covered are never compared again.

use crate::algorithm::strategy::{FillStrategy, Trace, paint};
use crate::algorithm::validation::Seed;
use crate::io::error::Result;
use crate::spatial::Surface;

/// Span fill that skips ranges already covered by the parent span
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeSpanFill;

/// A filled run awaiting expansion
#[derive(Clone, Copy, Debug)]
struct Span {
    row: usize,
    /// First column of the run
    left: usize,
    /// Last column of the run (inclusive)
    right: usize,
    /// Columns of the parent run, half-open
    parent: (usize, usize),
    /// Row step from the parent to this span (+1 or -1)
    heading: isize,
}

impl FillStrategy for RangeSpanFill {
    fn name(&self) -> &'static str {
        "range-span"
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

        let (left, right) = claim_run(surface, seed.row, seed.col, cols, old, new, trace);
        // An empty parent makes the first span scan both neighbor rows in full
        let mut stack = vec![Span {
            row: seed.row,
            left,
            right,
            parent: (right + 1, right + 1),
            heading: 1,
        }];
        trace.observe_pending(stack.len());

        while let Some(span) = stack.pop() {
            let onward = (span.heading, span.left, span.right + 1);
            let back_left = (-span.heading, span.left, span.parent.0.min(span.right + 1));
            let back_right = (-span.heading, span.parent.1.max(span.left), span.right + 1);

            for (step, start, end) in [onward, back_left, back_right] {
                let Some(row) = span.row.checked_add_signed(step).filter(|&r| r < rows) else {
                    continue;
                };

                let mut col = start;
                while col < end {
                    if surface.holds(row, col, old) {
                        let (left, right) = claim_run(surface, row, col, cols, old, new, trace);
                        stack.push(Span {
                            row,
                            left,
                            right,
                            parent: (span.left, span.right + 1),
                            heading: step,
                        });
                        // The cell after a run never matches
                        col = right + 2;
                    } else {
                        col += 1;
                    }
                }
            }

            trace.observe_pending(stack.len());
        }

        Ok(())
    }
}

/// Fill the whole old-colored run containing (`row`, `col`)
///
/// Returns the run's first and last column.
fn claim_run<S: Surface>(
    surface: &mut S,
    row: usize,
    col: usize,
    cols: usize,
    old: &S::Color,
    new: &S::Color,
    trace: &mut Trace,
) -> (usize, usize) {
    let mut left = col;
    while left > 0 && surface.holds(row, left - 1, old) {
        left -= 1;
    }

    let mut right = col;
    while right + 1 < cols && surface.holds(row, right + 1, old) {
        right += 1;
    }

    for current in left..=right {
        paint(surface, row, current, new, trace);
    }

    (left, right)
}
