//! Command-line interface for filling images and comparing strategies

use crate::algorithm::instrumentation::{FillStats, compare, measure};
use crate::algorithm::frontier::FrontierFill;
use crate::algorithm::range_span::RangeSpanFill;
use crate::algorithm::recursive::RecursiveFill;
use crate::algorithm::row_span::RowSpanFill;
use crate::algorithm::strategy::{FillStrategy, Strategy};
use crate::algorithm::validation::FillRequest;
use crate::io::configuration::{
    DEFAULT_CHANNEL, DEFAULT_COLOR, DEFAULT_DENSITY, DEFAULT_REPETITIONS, DEFAULT_SEED,
    OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_channel, save_grayscale};
use crate::io::progress::ProgressManager;
use crate::io::synthetic::{noise, parse_dimensions};
use crate::spatial::Grid;
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Strategy names accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Depth-first recursion
    Recursive,
    /// Breadth-first waves
    Frontier,
    /// Scanline with a point stack
    RowSpan,
    /// Scanline with parent-span tracking
    RangeSpan,
}

impl StrategyArg {
    /// Build the strategy, applying any stack budget to the recursive one
    pub const fn to_strategy(self, stack_budget: Option<usize>) -> Strategy {
        match self {
            Self::Recursive => Strategy::Recursive(match stack_budget {
                Some(budget) => RecursiveFill::with_stack_budget(budget),
                None => RecursiveFill::new(),
            }),
            Self::Frontier => Strategy::Frontier(FrontierFill),
            Self::RowSpan => Strategy::RowSpan(RowSpanFill),
            Self::RangeSpan => Strategy::RangeSpan(RangeSpanFill),
        }
    }
}

#[derive(Parser)]
#[command(name = "bucketfill")]
#[command(
    author,
    version,
    about = "Fill a 4-connected region of an image or synthetic grid"
)]
/// Command-line arguments for the fill tool
pub struct Cli {
    /// Input image to fill (PNG or BMP)
    #[arg(value_name = "TARGET", required_unless_present = "synthetic")]
    pub target: Option<PathBuf>,

    /// Seed row (image y coordinate)
    #[arg(short, long, allow_hyphen_values = true)]
    pub row: String,

    /// Seed column (image x coordinate)
    #[arg(short, long, allow_hyphen_values = true)]
    pub col: String,

    /// Replacement value written into the channel
    #[arg(short = 'k', long, default_value_t = DEFAULT_COLOR)]
    pub color: u8,

    /// Fill strategy
    #[arg(short, long, value_enum, default_value_t = StrategyArg::RangeSpan)]
    pub strategy: StrategyArg,

    /// Image channel to fill (0 red, 1 green, 2 blue, 3 alpha)
    #[arg(long, default_value_t = DEFAULT_CHANNEL)]
    pub channel: usize,

    /// Use a random HxW grid instead of an image
    #[arg(long, value_name = "HxW", conflicts_with = "target")]
    pub synthetic: Option<String>,

    /// Foreground density of the synthetic grid
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Random seed for the synthetic grid
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Run every strategy and report access counts and timing
    #[arg(short = 'x', long)]
    pub compare: bool,

    /// Timed runs per strategy when comparing
    #[arg(short = 'n', long, default_value_t = DEFAULT_REPETITIONS)]
    pub repeat: usize,

    /// Cap in bytes on the call stack the recursive strategy may use
    /// (defaults to the thread's remaining stack)
    #[arg(long)]
    pub stack_budget: Option<usize>,

    /// Output image path (defaults to <TARGET stem>_filled.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress report and progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress and reports should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Where the filled grid is written
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        self.target.as_deref().map_or_else(
            || PathBuf::from(format!("synthetic{OUTPUT_SUFFIX}.png")),
            get_output_path,
        )
    }
}

/// Summary of all comparison rounds for one strategy
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategySummary {
    /// Strategy name
    pub strategy: &'static str,
    /// Statistics of the last completed run
    pub last: Option<FillStats>,
    /// Total time over completed runs
    pub total_elapsed: Duration,
    /// Number of completed runs
    pub completed: usize,
    /// Error message if a run failed
    pub error: Option<String>,
}

impl StrategySummary {
    const fn new(strategy: &'static str) -> Self {
        Self {
            strategy,
            last: None,
            total_elapsed: Duration::ZERO,
            completed: 0,
            error: None,
        }
    }

    /// Mean time per completed run
    pub fn mean_elapsed(&self) -> Duration {
        u32::try_from(self.completed)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total_elapsed / n)
    }
}

/// Render comparison summaries as an aligned text table
pub fn format_report(summaries: &[StrategySummary]) -> String {
    let header = format!(
        "{:<12} {:>12} {:>12} {:>12} {:>14}",
        "strategy", "reads", "writes", "peak", "mean time"
    );
    std::iter::once(header)
        .chain(summaries.iter().map(format_row))
        .map(|line| line + "\n")
        .collect()
}

fn format_row(summary: &StrategySummary) -> String {
    match (&summary.last, &summary.error) {
        (_, Some(error)) => format!("{:<12} failed: {error}", summary.strategy),
        (Some(stats), None) => format!(
            "{:<12} {:>12} {:>12} {:>12} {:>14.2?}",
            summary.strategy,
            stats.reads,
            stats.writes,
            stats.peak_pending,
            summary.mean_elapsed()
        ),
        (None, None) => format!("{:<12} no runs", summary.strategy),
    }
}

/// Loads the grid, runs the requested fill or comparison and writes output
pub struct FillRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FillRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = (cli.should_show_progress() && cli.compare).then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Execute according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be loaded, the request is
    /// invalid, a fill fails, strategies disagree or output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let mut grid = self.load_grid()?;
        let request = FillRequest::parse(&self.cli.row, &self.cli.col, self.cli.color)?;

        let output_path = self.cli.output_path();
        if self.cli.compare {
            let filled = self.compare_strategies(&grid, &request)?;
            save_grayscale(&filled, &output_path)?;
            info!("wrote {}", output_path.display());
            return Ok(());
        }

        match self.fill_once(&mut grid, &request) {
            Ok(()) => {
                save_grayscale(&grid, &output_path)?;
                info!("wrote {}", output_path.display());
                Ok(())
            }
            // Validation failures happen before any write, so there is nothing to keep
            Err(error) if error.is_validation() => Err(error),
            Err(error) => {
                save_grayscale(&grid, &output_path)?;
                warn!(
                    "{error}; wrote the partially filled grid to {}",
                    output_path.display()
                );
                Err(error)
            }
        }
    }

    /// Build the grid from the target image or the synthetic settings
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be read or the synthetic
    /// settings are invalid
    pub fn load_grid(&self) -> Result<Grid<u8>> {
        if let Some(raw) = &self.cli.synthetic {
            let (rows, cols) = parse_dimensions(raw)?;
            info!("generating {rows}x{cols} synthetic grid (seed {})", self.cli.seed);
            return noise(rows, cols, self.cli.density, self.cli.seed);
        }

        let target = self
            .cli
            .target
            .as_deref()
            .ok_or_else(|| invalid_parameter("target", &"", &"an image or --synthetic is required"))?;
        info!("loading channel {} of {}", self.cli.channel, target.display());
        load_channel(target, self.cli.channel)
    }

    // Allow print for the user-facing statistics line
    #[allow(clippy::print_stdout)]
    fn fill_once(&self, grid: &mut Grid<u8>, request: &FillRequest<u8>) -> Result<()> {
        let strategy = self.cli.strategy.to_strategy(self.cli.stack_budget);
        let stats = measure(grid, request, &strategy)?;

        if self.cli.should_show_progress() {
            println!(
                "{}: {} writes, {} reads, peak {} pending, {:.2?}",
                stats.strategy, stats.writes, stats.reads, stats.peak_pending, stats.elapsed
            );
        }
        Ok(())
    }

    // Allow print for the comparison table
    #[allow(clippy::print_stdout)]
    fn compare_strategies(&mut self, grid: &Grid<u8>, request: &FillRequest<u8>) -> Result<Grid<u8>> {
        if self.cli.repeat == 0 {
            return Err(invalid_parameter("repeat", &0, &"must be at least 1"));
        }

        let strategies = [
            StrategyArg::Recursive,
            StrategyArg::Frontier,
            StrategyArg::RowSpan,
            StrategyArg::RangeSpan,
        ]
        .map(|arg| arg.to_strategy(self.cli.stack_budget));
        let names = strategies.map(|s| s.name());
        let mut summaries = names.map(StrategySummary::new);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(&names, self.cli.repeat);
        }

        let mut result = grid.clone();
        for _ in 0..self.cli.repeat {
            let comparison = compare(grid, request, &strategies)?;
            comparison.ensure_equivalent()?;
            if let Some(filled) = comparison.result() {
                result = filled.clone();
            }

            for (index, (run, summary)) in comparison.runs.iter().zip(&mut summaries).enumerate() {
                match &run.outcome {
                    Ok(stats) => {
                        summary.total_elapsed += stats.elapsed;
                        summary.completed += 1;
                        summary.last = Some(stats.clone());
                    }
                    Err(error) => summary.error = Some(error.to_string()),
                }
                if let Some(ref pm) = self.progress_manager {
                    pm.advance(index);
                }
            }
        }

        if let Some(ref pm) = self.progress_manager {
            for (index, summary) in summaries.iter().enumerate() {
                match &summary.error {
                    Some(error) => pm.abandon(index, error),
                    None => pm.complete(index, summary.mean_elapsed()),
                }
            }
            pm.finish();
        }

        if self.cli.should_show_progress() {
            print!("{}", format_report(&summaries));
        }
        Ok(result)
    }
}

/// Output path next to the input: `<stem>_filled.png`
pub fn get_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
