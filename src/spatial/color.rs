//! Cell color values
//!
//! Any equality-comparable, displayable type can be stored in a grid. The
//! `kind` tag lets the validator confirm that every cell of a grid shares
//! one representation, which only matters for the dynamically typed `Value`.

use std::fmt;

/// A value that can occupy a grid cell
pub trait Color: Clone + PartialEq + fmt::Display {
    /// Representation tag used for grid homogeneity checks
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl Color for char {}
impl Color for u8 {}
impl Color for u16 {}
impl Color for u32 {}
impl Color for u64 {}
impl Color for i32 {}
impl Color for i64 {}
impl Color for String {}
impl Color for &'static str {}

/// Dynamically typed color for grids assembled from mixed sources
///
/// A fill may replace one kind with another (a character marker with a
/// numeric id, say); only the cells already in the grid must agree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Single character marker
    Char(char),
    /// Integer color or id
    Int(i64),
    /// Arbitrary text label
    Text(String),
}

impl Color for Value {
    fn kind(&self) -> &'static str {
        match self {
            Self::Char(_) => "char",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
