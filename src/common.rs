//! Shared error types for board geometry.

use core::fmt;

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Position string is malformed or names a square outside the board.
    InvalidNotation { input: String, size: usize },
    /// Cell coordinates lie outside [0, size) on one or both axes.
    OutOfBounds { row: usize, col: usize, size: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidNotation { input, size } => {
                write!(f, "invalid position '{}' for a {}x{} board", input, size, size)
            }
            BoardError::OutOfBounds { row, col, size } => {
                write!(f, "cell ({}, {}) is outside a {}x{} board", row, col, size, size)
            }
        }
    }
}

impl std::error::Error for BoardError {}
