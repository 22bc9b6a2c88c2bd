//! Breadth-first fill by expanding waves
//!
//! Each round examines the neighbors of every cell filled in the previous
//! round (row + 1, row - 1, col + 1, col - 1) and fills those still
//! holding the old color. Memory is bounded by the wave's perimeter, but
//! every filled cell passes through a frontier once.

use crate::algorithm::strategy::{FillStrategy, Trace, paint};
use crate::algorithm::validation::Seed;
use crate::io::error::Result;
use crate::spatial::Surface;

/// Breadth-first wave fill
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrontierFill;

impl FillStrategy for FrontierFill {
    fn name(&self) -> &'static str {
        "frontier"
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

        paint(surface, seed.row, seed.col, new, trace);
        let mut frontier = vec![(seed.row, seed.col)];

        while !frontier.is_empty() {
            trace.observe_pending(frontier.len());
            let mut next = Vec::new();

            for &(row, col) in &frontier {
                let neighbors = [
                    (row + 1 < rows).then_some((row + 1, col)),
                    row.checked_sub(1).map(|r| (r, col)),
                    (col + 1 < cols).then_some((row, col + 1)),
                    col.checked_sub(1).map(|c| (row, c)),
                ];

                for (r, c) in neighbors.into_iter().flatten() {
                    if surface.holds(r, c, old) {
                        paint(surface, r, c, new, trace);
                        next.push((r, c));
                    }
                }
            }

            frontier = next;
        }

        Ok(())
    }
}
