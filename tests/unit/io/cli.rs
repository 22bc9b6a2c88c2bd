//! Tests for command-line parsing, output paths and the comparison report

#[cfg(test)]
mod tests {
    use bucketfill::algorithm::recursive::RecursiveFill;
    use bucketfill::algorithm::strategy::Strategy;
    use bucketfill::io::cli::{
        Cli, FillRunner, StrategyArg, StrategySummary, format_report, get_output_path,
    };
    use bucketfill::io::configuration::{DEFAULT_COLOR, DEFAULT_SEED};
    use bucketfill::io::error::FillError;
    use bucketfill::FillStats;
    use clap::Parser;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    // Tests parsing with only the target and seed coordinates
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "test.png", "-r", "3", "-c", "4"]);

        assert_eq!(cli.target, Some(PathBuf::from("test.png")));
        assert_eq!(cli.row, "3");
        assert_eq!(cli.col, "4");
        assert_eq!(cli.color, DEFAULT_COLOR);
        assert_eq!(cli.strategy, StrategyArg::RangeSpan);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.stack_budget, None);
        assert!(!cli.compare);
        assert!(!cli.quiet);
    }

    // Tests parsing with every option given
    // Verified by renaming a long flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--synthetic",
            "64x32",
            "--row",
            "-1",
            "--col",
            "5",
            "--color",
            "200",
            "--strategy",
            "row-span",
            "--density",
            "0.3",
            "--seed",
            "7",
            "--compare",
            "--repeat",
            "3",
            "--stack-budget",
            "4096",
            "--output",
            "out/result.png",
            "--quiet",
        ]);

        assert_eq!(cli.target, None);
        assert_eq!(cli.synthetic.as_deref(), Some("64x32"));
        assert_eq!(cli.row, "-1");
        assert_eq!(cli.color, 200);
        assert_eq!(cli.strategy, StrategyArg::RowSpan);
        assert!((cli.density - 0.3).abs() < f64::EPSILON);
        assert_eq!(cli.seed, 7);
        assert!(cli.compare);
        assert_eq!(cli.repeat, 3);
        assert_eq!(cli.stack_budget, Some(4096));
        assert_eq!(cli.output_path(), PathBuf::from("out/result.png"));
        assert!(!cli.should_show_progress());
    }

    // Tests a grid source is required
    // Verified by removing required_unless_present
    #[test]
    fn test_cli_requires_target_or_synthetic() {
        assert!(Cli::try_parse_from(["program", "-r", "0", "-c", "0"]).is_err());
        assert!(
            Cli::try_parse_from(["program", "a.png", "--synthetic", "4x4", "-r", "0", "-c", "0"])
                .is_err()
        );
    }

    // Tests the stack budget only applies to the recursive strategy
    // Verified by ignoring the budget argument
    #[test]
    fn test_strategy_arg_conversion() {
        assert_eq!(
            StrategyArg::Recursive.to_strategy(Some(2048)),
            Strategy::Recursive(RecursiveFill::with_stack_budget(2048))
        );
        assert_eq!(StrategyArg::Recursive.to_strategy(None), Strategy::all()[0]);
        assert_eq!(StrategyArg::Frontier.to_strategy(Some(2048)), Strategy::all()[1]);
        assert_eq!(StrategyArg::RowSpan.to_strategy(Some(2048)), Strategy::all()[2]);
        assert_eq!(StrategyArg::RangeSpan.to_strategy(None), Strategy::all()[3]);
    }

    // Tests output filename generation
    // Verified by changing the suffix
    #[test]
    fn test_output_paths() {
        assert_eq!(
            get_output_path(Path::new("images/maze.bmp")),
            PathBuf::from("images/maze_filled.png")
        );
        assert_eq!(
            get_output_path(Path::new("maze.png")),
            PathBuf::from("maze_filled.png")
        );

        let cli = Cli::parse_from(["program", "--synthetic", "8x8", "-r", "0", "-c", "0"]);
        assert_eq!(cli.output_path(), PathBuf::from("synthetic_filled.png"));
    }

    // Tests mean time ignores failed rounds
    // Verified by dividing by the requested repetitions
    #[test]
    fn test_summary_mean_elapsed() {
        let summary = StrategySummary {
            strategy: "frontier",
            last: None,
            total_elapsed: Duration::from_millis(30),
            completed: 3,
            error: None,
        };
        assert_eq!(summary.mean_elapsed(), Duration::from_millis(10));

        let idle = StrategySummary {
            completed: 0,
            ..summary
        };
        assert_eq!(idle.mean_elapsed(), Duration::ZERO);
    }

    // Tests the report lists statistics and failures per strategy
    // Verified by omitting failed strategies from the report
    #[test]
    fn test_format_report() {
        let stats = FillStats {
            strategy: "range-span",
            reads: 120,
            writes: 100,
            elapsed: Duration::from_micros(5),
            peak_pending: 3,
        };
        let report = format_report(&[
            StrategySummary {
                strategy: "range-span",
                last: Some(stats),
                total_elapsed: Duration::from_micros(5),
                completed: 1,
                error: None,
            },
            StrategySummary {
                strategy: "recursive",
                last: None,
                total_elapsed: Duration::ZERO,
                completed: 0,
                error: Some("too deep".to_owned()),
            },
        ]);
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("strategy"));
        assert!(lines[1].contains("120"));
        assert!(lines[1].contains("100"));
        assert!(lines[1].ends_with("5.00µs"));
        assert_eq!(
            lines[1].chars().count(),
            lines[0].chars().count(),
            "Mean time should be padded to the header column"
        );
        assert!(lines[2].contains("failed: too deep"));
        assert!(report.ends_with('\n'));
    }

    // Tests synthetic grids are built from the CLI settings
    // Verified by ignoring the density argument
    #[test]
    fn test_runner_loads_synthetic_grid() {
        let cli = Cli::parse_from([
            "program",
            "--synthetic",
            "6x9",
            "--density",
            "1",
            "-r",
            "0",
            "-c",
            "0",
        ]);
        let runner = FillRunner::new(cli);

        let Ok(grid) = runner.load_grid() else {
            unreachable!("Synthetic settings are valid");
        };

        assert_eq!(grid.dimensions(), (6, 9));
        assert!(grid.cells().all(|(_, cell)| *cell == 255));
    }

    // Tests a bad seed is reported before anything is written
    // Verified by saving output before parsing the seed
    #[test]
    fn test_runner_rejects_bad_seed() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be created");
        };
        let output = dir.path().join("out.png");
        let target = output.to_string_lossy().into_owned();
        let cli = Cli::parse_from([
            "program",
            "--synthetic",
            "4x4",
            "-r",
            "x",
            "-c",
            "0",
            "-o",
            target.as_str(),
        ]);

        let result = FillRunner::new(cli).process();

        assert!(matches!(result, Err(FillError::InvalidSeedType { .. })));
        assert!(!output.exists());
    }

    // Tests a comparison run writes the filled grid
    // Verified by returning the unfilled grid from the comparison
    #[test]
    fn test_runner_compare_writes_output() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be created");
        };
        let output = dir.path().join("compare.png");
        let target = output.to_string_lossy().into_owned();
        let cli = Cli::parse_from([
            "program",
            "--synthetic",
            "16x16",
            "--density",
            "0",
            "-r",
            "3",
            "-c",
            "3",
            "-k",
            "9",
            "-x",
            "-n",
            "2",
            "-q",
            "-o",
            target.as_str(),
        ]);

        let result = FillRunner::new(cli).process();

        assert!(result.is_ok(), "{result:?}");
        let Ok(image) = image::open(&output) else {
            unreachable!("Output image should be readable");
        };
        assert!(image.to_luma8().pixels().all(|pixel| pixel.0 == [9]));
    }

    // Tests a recursive overflow still writes the partial grid and reports the error
    // Verified by returning before saving on any fill error
    #[test]
    fn test_runner_keeps_partial_fill_on_overflow() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be created");
        };
        let output = dir.path().join("partial.png");
        let target = output.to_string_lossy().into_owned();
        let cli = Cli::parse_from([
            "program",
            "--synthetic",
            "200x200",
            "--density",
            "0",
            "-r",
            "0",
            "-c",
            "0",
            "-k",
            "9",
            "-s",
            "recursive",
            "--stack-budget",
            "4096",
            "-q",
            "-o",
            target.as_str(),
        ]);

        let result = FillRunner::new(cli).process();

        assert!(matches!(result, Err(FillError::TraversalOverflow { .. })));
        let Ok(image) = image::open(&output) else {
            unreachable!("Partial output should be written");
        };
        let luma = image.to_luma8();
        let painted = luma.pixels().filter(|pixel| pixel.0 == [9]).count();
        assert!(painted > 0);
        assert!(painted < 200 * 200);
    }
}
