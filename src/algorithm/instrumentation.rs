//! Access counting and timing for comparing strategies
//!
//! Nothing here changes what a fill does. `measure` swaps the grid for a
//! `CountingSurface` and times the strategy call; `compare` runs several
//! strategies on separate copies of one grid.

use std::time::{Duration, Instant};

use crate::algorithm::strategy::{FillStrategy, Strategy, fill_on};
use crate::algorithm::validation::{FillRequest, validate};
use crate::io::error::{FillError, Result};
use crate::spatial::{Color, CountingSurface, Grid};

/// Diagnostics for a single fill call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillStats {
    /// Name of the strategy that ran
    pub strategy: &'static str,
    /// Cell reads, including the read of the seed's old color
    pub reads: u64,
    /// Cell writes
    pub writes: u64,
    /// Wall time spent inside the strategy (validation excluded)
    pub elapsed: Duration,
    /// Peak size of the strategy's pending-work structure
    pub peak_pending: usize,
}

/// Fill a grid while counting cell accesses and timing the traversal
///
/// # Errors
///
/// Returns the same errors as [`crate::algorithm::strategy::fill`]
pub fn measure<C: Color, F: FillStrategy>(
    grid: &mut Grid<C>,
    request: &FillRequest<C>,
    strategy: &F,
) -> Result<FillStats> {
    let seed = validate(grid, request)?;
    let mut surface = CountingSurface::new(grid);

    let start = Instant::now();
    let trace = fill_on(&mut surface, seed, &request.color, strategy)?;
    let elapsed = start.elapsed();

    Ok(FillStats {
        strategy: strategy.name(),
        reads: surface.reads(),
        writes: surface.writes(),
        elapsed,
        peak_pending: trace.peak_pending,
    })
}

/// Outcome of one strategy during a comparison
#[derive(Debug)]
pub struct Run<C> {
    /// Name of the strategy
    pub strategy: &'static str,
    /// Statistics, or the error the strategy stopped with
    pub outcome: Result<FillStats>,
    /// The strategy's copy of the grid after the fill
    pub grid: Grid<C>,
}

/// Results of running several strategies on copies of one grid
#[derive(Debug)]
pub struct Comparison<C> {
    /// One entry per strategy, in the order given
    pub runs: Vec<Run<C>>,
}

impl<C: Color> Comparison<C> {
    /// Strategies whose completed grid differs from the first completed one
    ///
    /// Runs that stopped with an error are left out, since their grids may
    /// be partially filled.
    pub fn mismatched(&self) -> Vec<&'static str> {
        let mut completed = self.runs.iter().filter(|run| run.outcome.is_ok());
        let Some(reference) = completed.next() else {
            return Vec::new();
        };

        completed
            .filter(|run| run.grid != reference.grid)
            .map(|run| run.strategy)
            .collect()
    }

    /// Whether every completed strategy produced the same grid
    pub fn is_equivalent(&self) -> bool {
        self.mismatched().is_empty()
    }

    /// Fail if completed strategies disagree
    ///
    /// # Errors
    ///
    /// Returns `StrategyMismatch` naming the disagreeing strategies
    pub fn ensure_equivalent(&self) -> Result<()> {
        let strategies = self.mismatched();
        if strategies.is_empty() {
            Ok(())
        } else {
            Err(FillError::StrategyMismatch { strategies })
        }
    }

    /// Final grid of the first completed run
    pub fn result(&self) -> Option<&Grid<C>> {
        self.runs
            .iter()
            .find(|run| run.outcome.is_ok())
            .map(|run| &run.grid)
    }
}

/// Run each strategy on its own copy of `grid`
///
/// The request is validated once up front; a strategy that fails mid-fill
/// is recorded in its run rather than aborting the comparison.
///
/// # Errors
///
/// Returns a validation error if the request is rejected
pub fn compare<C: Color>(
    grid: &Grid<C>,
    request: &FillRequest<C>,
    strategies: &[Strategy],
) -> Result<Comparison<C>> {
    validate(grid, request)?;

    let runs = strategies
        .iter()
        .map(|strategy| {
            let mut copy = grid.clone();
            let outcome = measure(&mut copy, request, strategy);
            Run {
                strategy: strategy.name(),
                outcome,
                grid: copy,
            }
        })
        .collect();

    Ok(Comparison { runs })
}
