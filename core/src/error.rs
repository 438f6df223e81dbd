use alloc::string::String;
use alloc::vec::Vec;
use thiserror::Error;

use crate::types::Coord2;

/// Malformed puzzle text: the document cannot be read at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing scalar field `{0}`")]
    MissingField(String),
    #[error("no bracketed board block in document")]
    MissingBoard,
    #[error("token `{0}` is not an integer")]
    BadToken(String),
    #[error("{values} board values cannot fill rows of {columns} columns")]
    RowCountMismatch { values: usize, columns: usize },
}

/// Structurally readable input with semantically invalid content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("board has no cells")]
    EmptyBoard,
    #[error("row {row} has {got} values, expected {expected}")]
    NonRectangular {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("declared {declared} rows but board holds {actual}")]
    SizeMismatch { declared: usize, actual: usize },
    #[error("declared value {0} is out of range")]
    ValueOutOfRange(i64),
    #[error("cell values below -2 at {positions:?}")]
    BadCellValues { positions: Vec<Coord2> },
    #[error("unreadable manual entries at {positions:?}")]
    BadEntries { positions: Vec<Coord2> },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
