//! Unified error types for Lifeboard.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use lifeboard_core::BoardId;
use thiserror::Error;

/// All Lifeboard errors.
///
/// This is the canonical error type for all Lifeboard operations. Each
/// failure is scoped to the single board and operation that raised it.
#[derive(Debug, Error)]
pub enum Error {
    /// No board is stored under the identifier
    #[error("board not found: {0}")]
    NotFound(BoardId),

    /// Uploaded board has bad dimensions or a mismatched state shape
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// Step count is not a positive integer
    #[error("invalid steps: {0} (must be a positive integer)")]
    InvalidSteps(i64),

    /// Final-state search used its whole budget
    #[error("board did not stabilize after {attempts} attempts")]
    NotStabilized {
        /// Transitions applied before giving up
        attempts: u32,
    },

    /// Configuration could not be read or is invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Storage error
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for Lifeboard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if the caller's input was rejected before any work ran.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidBoard(_) | Error::InvalidSteps(_))
    }

    /// Check if a final-state search ran out of attempts.
    pub fn is_not_stabilized(&self) -> bool {
        matches!(self, Error::NotStabilized { .. })
    }
}

// Convert from core validation errors
impl From<lifeboard_core::Error> for Error {
    fn from(e: lifeboard_core::Error) -> Self {
        use lifeboard_core::Error as CoreError;
        match e {
            CoreError::InvalidBoard(msg) => Error::InvalidBoard(msg),
            CoreError::ShapeMismatch { expected, actual } => Error::InvalidBoard(format!(
                "shape mismatch: expected {} cells, got {}",
                expected, actual
            )),
            CoreError::InvalidFingerprint(msg) => Error::InvalidBoard(msg),
            CoreError::InvalidBoardId(msg) => Error::InvalidBoard(format!("bad id {}", msg)),
        }
    }
}

// Convert from storage errors
impl From<lifeboard_storage::StorageError> for Error {
    fn from(e: lifeboard_storage::StorageError) -> Self {
        use lifeboard_storage::StorageError as SE;
        match e {
            SE::NotFound(id) => Error::NotFound(id),
            SE::Io(io_err) => Error::Io(io_err),
            SE::Serialization(msg) => Error::Serialization(msg),
            SE::Corrupt { id, reason } => {
                Error::Storage(format!("corrupt record for board {}: {}", id, reason))
            }
        }
    }
}

// Convert from search exhaustion
impl From<lifeboard_engine::Exhausted> for Error {
    fn from(e: lifeboard_engine::Exhausted) -> Self {
        Error::NotStabilized {
            attempts: e.attempts,
        }
    }
}
