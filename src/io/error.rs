//! Error types and path context for fill operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all fill operations
#[derive(Debug)]
pub enum FillError {
    /// Seed coordinate is not an integer value
    InvalidSeedType {
        /// The coordinate as supplied by the caller
        raw: String,
    },

    /// Seed coordinate lies outside the grid
    InvalidSeedBounds {
        /// Requested row
        row: i64,
        /// Requested column
        col: i64,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Grid has no rows or no columns
    EmptyGrid,

    /// A row differs in length from the first row
    InconsistentRowLengths {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Cells of the grid do not share one representation
    InconsistentCellTypes {
        /// Row of the first mismatching cell
        row: usize,
        /// Column of the first mismatching cell
        col: usize,
        /// Kind of the first cell in the grid
        expected: &'static str,
        /// Kind of the mismatching cell
        found: &'static str,
    },

    /// Recursive traversal ran out of its stack budget
    ///
    /// The grid is left partially filled: every cell counted in `filled`
    /// has already been overwritten with the new color.
    TraversalOverflow {
        /// Stack budget in bytes that was exhausted
        stack_budget: usize,
        /// Cells written before the traversal stopped
        filled: usize,
    },

    /// Strategies disagreed on the final grid during comparison
    StrategyMismatch {
        /// Names of the strategies whose grids differ from the first one
        strategies: Vec<&'static str>,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save filled image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeedType { raw } => {
                write!(f, "Invalid seed format '{raw}': expected an integer")
            }
            Self::InvalidSeedBounds {
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Seed ({row}, {col}) is outside the grid (size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::EmptyGrid => write!(f, "Grid has an empty dimension"),
            Self::InconsistentRowLengths {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has {found} cells but the first row has {expected}"
                )
            }
            Self::InconsistentCellTypes {
                row,
                col,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Cell ({row}, {col}) holds a {found} value in a grid of {expected} values"
                )
            }
            Self::TraversalOverflow {
                stack_budget,
                filled,
            } => {
                write!(
                    f,
                    "Recursive fill exceeded its {stack_budget} byte stack budget after filling {filled} cells"
                )
            }
            Self::StrategyMismatch { strategies } => {
                write!(
                    f,
                    "Strategies produced different grids: {}",
                    strategies.join(", ")
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for FillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl FillError {
    /// Whether the error was raised before any cell was written
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSeedType { .. }
                | Self::InvalidSeedBounds { .. }
                | Self::EmptyGrid
                | Self::InconsistentRowLengths { .. }
                | Self::InconsistentCellTypes { .. }
        )
    }
}

/// Convenience type alias for fill results
pub type Result<T> = std::result::Result<T, FillError>;

/// Attaches a filesystem path to errors produced by `From` conversions
pub trait WithPath<T> {
    /// Replace the placeholder path of image and filesystem errors
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<FillError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors that carry a path benefit from the context
            match &mut error {
                FillError::ImageLoad { path: slot, .. }
                | FillError::ImageExport { path: slot, .. }
                | FillError::FileSystem { path: slot, .. } => {
                    *slot = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for FillError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for FillError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FillError {
    FillError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
