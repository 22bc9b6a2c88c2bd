//! Bucket fill for 2D color grids with interchangeable flood fill strategies
//!
//! A fill replaces every cell 4-connected to a seed through cells of the
//! seed's color. Four strategies (recursive, breadth-first frontier, row
//! span scanline, parent-aware range span) produce identical grids and
//! differ in traversal order, memory use and cell accesses.

#![forbid(unsafe_code)]

/// Fill strategies, validation and instrumentation
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Color grid and cell access
pub mod spatial;

pub use algorithm::instrumentation::{Comparison, FillStats, compare, measure};
pub use algorithm::strategy::{FillStrategy, Strategy, Trace, fill, fill_rows};
pub use algorithm::validation::{FillRequest, Seed};
pub use io::error::{FillError, Result};
pub use spatial::{Color, Grid, Value};
