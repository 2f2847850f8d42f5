//! Error types for core board handling

use thiserror::Error;

/// Errors raised while building or parsing boards and grids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Board dimensions or state shape are unacceptable
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// A grid's cell buffer does not match its declared shape
    #[error("shape mismatch: expected {expected} cells, got {actual}")]
    ShapeMismatch {
        /// rows * columns
        expected: usize,
        /// Cells actually supplied
        actual: usize,
    },

    /// Text could not be parsed as a fingerprint
    #[error("invalid fingerprint: {0}")]
    InvalidFingerprint(String),

    /// Text could not be parsed as a board identifier
    #[error("invalid board id: {0}")]
    InvalidBoardId(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
