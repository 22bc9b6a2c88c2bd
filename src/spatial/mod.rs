//! Spatial data structures and cell access
//!
//! This module contains spatial-related functionality including:
//! - Cell color values and homogeneity tags
//! - The owned color grid
//! - The access seam strategies are written against

/// Cell color trait and the dynamically typed `Value`
pub mod color;
/// Owned rectangular color grid
pub mod grid;
/// Cell access trait and access-counting wrapper
pub mod surface;

pub use color::{Color, Value};
pub use grid::Grid;
pub use surface::{CountingSurface, Surface};
