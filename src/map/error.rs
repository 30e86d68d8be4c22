use thiserror::Error;

use super::Cell;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no {0} marker")]
    MissingMarker(Cell),

    #[error("grid is empty")]
    Empty,

    #[error("row {row} is {len} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unknown marker {marker:?} at ({row}, {col})")]
    UnknownMarker { marker: char, row: usize, col: usize },
}
