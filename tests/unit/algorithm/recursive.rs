//! Tests for depth-first recursive fill and stack budget handling

#[cfg(test)]
mod tests {
    use bucketfill::algorithm::recursive::RecursiveFill;
    use bucketfill::algorithm::strategy::{FillStrategy, Trace};
    use bucketfill::algorithm::validation::Seed;
    use bucketfill::io::error::FillError;
    use bucketfill::spatial::{Grid, Surface};
    use std::thread;

    /// Grid wrapper remembering the order of writes
    struct Recorder {
        grid: Grid<char>,
        writes: Vec<(usize, usize)>,
    }

    impl Surface for Recorder {
        type Color = char;

        fn dimensions(&self) -> (usize, usize) {
            self.grid.dimensions()
        }

        fn read(&self, row: usize, col: usize) -> Option<&char> {
            self.grid.get(row, col)
        }

        fn write(&mut self, row: usize, col: usize, color: &char) {
            self.writes.push((row, col));
            self.grid.set(row, col, *color);
        }
    }

    // Tests neighbors are visited in the order row-1, row+1, col-1, col+1
    // Verified by swapping the column neighbor order
    #[test]
    fn test_visit_order_is_fixed() {
        let Ok(grid) = Grid::uniform(3, 3, 'O') else {
            unreachable!("Uniform grid should build");
        };
        let mut recorder = Recorder {
            grid,
            writes: Vec::new(),
        };
        let mut trace = Trace::default();

        let result = RecursiveFill::new().flood(
            &mut recorder,
            Seed { row: 1, col: 1 },
            &'O',
            &'*',
            &mut trace,
        );

        assert!(result.is_ok());
        assert_eq!(
            recorder.writes,
            vec![
                (1, 1),
                (0, 1),
                (0, 0),
                (1, 0),
                (2, 0),
                (2, 1),
                (2, 2),
                (1, 2),
                (0, 2)
            ]
        );
        assert_eq!(trace.cells_written, 9);
        assert_eq!(trace.peak_pending, 9, "Serpentine walk should reach depth 9");
    }

    // Tests exhausting the stack budget reports overflow and keeps the partial fill
    // Verified by swallowing the overflow and returning Ok
    #[test]
    fn test_overflow_is_reported_with_partial_fill() {
        let Ok(mut grid) = Grid::uniform(200, 200, 'O') else {
            unreachable!("Uniform grid should build");
        };
        let strategy = RecursiveFill::with_stack_budget(16 * 1024);

        let result = grid.fill(0, 0, '*', &strategy);

        let (stack_budget, filled) = match result {
            Err(FillError::TraversalOverflow {
                stack_budget,
                filled,
            }) => (stack_budget, filled),
            other => unreachable!("Expected TraversalOverflow, got {other:?}"),
        };
        assert_eq!(stack_budget, 16 * 1024);
        assert!(filled > 0, "Some cells should be filled before overflow");
        assert!(filled < 200 * 200, "Overflow should stop before the region is done");

        let painted = grid.cells().filter(|(_, c)| **c == '*').count();
        assert_eq!(painted, filled, "Reported count should match painted cells");
    }

    // Tests small regions complete when only the thread's stack limits the walk
    // Verified by making the default budget zero
    #[test]
    fn test_default_budget_fills_small_region() {
        let Ok(mut grid) = Grid::uniform(20, 20, 'O') else {
            unreachable!("Uniform grid should build");
        };

        let result = grid.fill(5, 5, '*', &RecursiveFill::default());

        assert!(result.is_ok());
        assert!(grid.cells().all(|(_, c)| *c == '*'));
        assert_eq!(RecursiveFill::default().stack_budget(), None);
    }

    // Tests a configured budget caps the limit and the thread's stack bounds it
    // Verified by ignoring the configured cap
    #[test]
    fn test_effective_budget_takes_smaller_limit() {
        let capped = RecursiveFill::with_stack_budget(4096).effective_budget();
        let unbounded = RecursiveFill::with_stack_budget(usize::MAX).effective_budget();

        assert_eq!(capped, 4096);
        assert!(unbounded < usize::MAX, "The thread's stack should bound the walk");
        assert!(unbounded > 4096);
    }

    // Tests a thread with little stack gets an overflow error instead of a crash
    // Verified by measuring against a fixed 1 MiB budget
    #[test]
    fn test_small_thread_stack_reports_overflow() {
        let worker = thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let Ok(mut grid) = Grid::uniform(100, 100, 'O') else {
                    unreachable!("Uniform grid should build");
                };
                let result = grid.fill(0, 1, '*', &RecursiveFill::new());
                let painted = grid.cells().filter(|(_, c)| **c == '*').count();
                match result {
                    Err(FillError::TraversalOverflow { filled, .. }) => Some((filled, painted)),
                    _ => None,
                }
            });
        let Ok(handle) = worker else {
            unreachable!("Worker thread should spawn");
        };

        let Ok(Some((filled, painted))) = handle.join() else {
            unreachable!("Walk should stop with TraversalOverflow");
        };

        assert!(filled > 0);
        assert!(filled < 100 * 100);
        assert_eq!(painted, filled);
    }

    // Tests diagonal neighbors are not reached
    // Verified by adding diagonal recursion
    #[test]
    fn test_diagonals_are_not_followed() {
        let Ok(mut grid) = Grid::from_rows(vec![
            vec!['O', 'X', 'O'],
            vec!['X', 'O', 'X'],
            vec!['O', 'X', 'O'],
        ]) else {
            unreachable!("Rectangular rows should build a grid");
        };

        let result = grid.fill(1, 1, '*', &RecursiveFill::new());

        assert!(result.is_ok());
        assert_eq!(grid.to_string(), "OXO\nX*X\nOXO");
    }
}
