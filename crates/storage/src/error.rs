//! Storage error types

use lifeboard_core::BoardId;
use thiserror::Error;

/// Errors raised by board stores.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No board is stored under the identifier
    #[error("board not found: {0}")]
    NotFound(BoardId),

    /// Underlying file system failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Record decoded but does not describe a valid board
    #[error("corrupt record for board {id}: {reason}")]
    Corrupt {
        /// Board whose record is damaged
        id: BoardId,
        /// What was wrong with it
        reason: String,
    },
}

impl StorageError {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
