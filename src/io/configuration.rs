//! Fill constants and runtime configuration defaults

// Half of the smallest stack a spawned thread commonly gets (2 MiB)
/// Stack budget in bytes for recursive traversal when the calling
/// thread's remaining stack cannot be measured
pub const FALLBACK_STACK_BUDGET: usize = 1024 * 1024;

/// Stack kept free below the recursion for the frames a visit calls into
pub const STACK_RED_ZONE: usize = 64 * 1024;

/// Image channel read into the grid (0 = red / luma)
pub const DEFAULT_CHANNEL: usize = 0;

/// Replacement color used when none is given
pub const DEFAULT_COLOR: u8 = 0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Synthetic grid settings
/// Fraction of synthetic cells that start as foreground
pub const DEFAULT_DENSITY: f64 = 0.45;
/// Fixed seed for reproducible synthetic grids
pub const DEFAULT_SEED: u64 = 42;
/// Foreground value of synthetic grids
pub const SYNTHETIC_FOREGROUND: u8 = 255;
/// Background value of synthetic grids
pub const SYNTHETIC_BACKGROUND: u8 = 0;

/// Number of timed runs per strategy during comparison
pub const DEFAULT_REPETITIONS: usize = 1;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_filled";
