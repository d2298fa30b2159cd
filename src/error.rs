//! Error types for the noughts crate

use std::fmt;

use thiserror::Error;

/// Why a cell could not take a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Row or column is outside `0..3`.
    OutOfRange,
    /// The cell already holds a mark.
    Occupied,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfRange => f.write_str("out of range"),
            MoveRejection::Occupied => f.write_str("already occupied"),
        }
    }
}

/// Main error type for the noughts crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: MoveRejection,
    },

    #[error("invalid board: {message}")]
    InvalidBoard { message: String },

    #[error("game already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,
}

/// Result type alias for noughts operations
pub type Result<T> = std::result::Result<T, Error>;
