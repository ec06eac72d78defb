//! Error types for grid construction and patrol simulation.
//!
//! Leaving the grid is not an error; it is the normal end of a patrol
//! and is reported through `Option`/outcome values instead.

use crate::position::Position;
use std::error::Error;
use std::fmt;

/// Errors from grid construction or grid addressing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The input had no rows, or its first row was empty.
    EmptyGrid,
    /// A dimension does not fit the signed coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: usize,
        /// Largest accepted size.
        max: u32,
    },
    /// A row's length differs from the first row's.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A symbol outside the cell alphabet.
    UnknownSymbol {
        /// Row of the symbol.
        row: usize,
        /// Column of the symbol.
        col: usize,
        /// The symbol itself.
        symbol: char,
    },
    /// More than one `^` cell.
    MultipleGuards {
        /// First guard found, row-major.
        first: Position,
        /// Second guard found.
        second: Position,
    },
    /// No `^` cell exists.
    GuardNotFound,
    /// A position outside the grid was addressed for writing.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::UnknownSymbol { row, col, symbol } => {
                write!(f, "unknown cell symbol {symbol:?} at ({row}, {col})")
            }
            Self::MultipleGuards { first, second } => {
                write!(f, "more than one guard: {first} and {second}")
            }
            Self::GuardNotFound => write!(f, "no guard start cell in grid"),
            Self::OutOfBounds {
                position,
                rows,
                cols,
            } => {
                write!(f, "position {position} out of bounds: [0, {rows}) x [0, {cols})")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from running a patrol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatrolError {
    /// The grid could not support a patrol.
    Grid(GridError),
    /// A bounded run reached its tick limit before exiting or looping.
    TickBudgetExceeded {
        /// The configured limit.
        limit: u64,
    },
}

impl fmt::Display for PatrolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::TickBudgetExceeded { limit } => {
                write!(f, "patrol exceeded tick budget of {limit}")
            }
        }
    }
}

impl Error for PatrolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::TickBudgetExceeded { .. } => None,
        }
    }
}

impl From<GridError> for PatrolError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
