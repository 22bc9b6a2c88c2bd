//! Input/output, configuration and error handling

/// Command-line interface and fill runner
pub mod cli;
/// Fill constants and runtime configuration defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Conversion between raster images and grids
pub mod image;
/// Progress display for comparison runs
pub mod progress;
/// Seeded random grids
pub mod synthetic;
