//! Per-strategy progress bars for repeated comparison runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates one progress bar per strategy during comparison
pub struct ProgressManager {
    multi_progress: MultiProgress,
    bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            bars: Vec::new(),
        }
    }

    /// Create one bar per strategy, each expecting `repetitions` runs
    pub fn initialize(&mut self, strategies: &[&'static str], repetitions: usize) {
        self.bars = strategies
            .iter()
            .map(|name| {
                let bar = ProgressBar::new(repetitions as u64);
                bar.set_style(PROGRESS_STYLE.clone());
                bar.set_prefix(*name);
                self.multi_progress.add(bar)
            })
            .collect();
    }

    /// Record one finished run of a strategy
    pub fn advance(&self, index: usize) {
        if let Some(bar) = self.bars.get(index) {
            bar.inc(1);
        }
    }

    /// Mark a strategy as done and show its mean run time
    pub fn complete(&self, index: usize, mean: Duration) {
        if let Some(bar) = self.bars.get(index) {
            bar.finish_with_message(format!("✓ {mean:.2?}"));
        }
    }

    /// Mark a strategy as stopped with an error
    pub fn abandon(&self, index: usize, reason: &str) {
        if let Some(bar) = self.bars.get(index) {
            bar.abandon_with_message(format!("✗ {reason}"));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
