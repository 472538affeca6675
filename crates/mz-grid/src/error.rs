//! Grid-subsystem error type.

use thiserror::Error;

use mz_core::GridPos;

/// Errors produced while building or loading a maze layout.
///
/// Reads on a constructed layout never fail; see the crate docs.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("layout is empty")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged {
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("unknown layout symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: String, row: usize, col: usize },

    #[error("layout must mark exactly one {what}, found {count}")]
    MarkerCount { what: &'static str, count: usize },

    #[error("{what} cell {pos} is {reason}")]
    BadMarker {
        what:   &'static str,
        pos:    GridPos,
        reason: &'static str,
    },

    #[error("invalid cell size {0}")]
    CellSize(f32),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
