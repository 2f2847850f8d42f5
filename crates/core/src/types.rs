//! Identifier types
//!
//! - [`BoardId`]: Unique identifier for a stored board

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;

/// Unique identifier for a board
///
/// Assigned once when a board is uploaded and never reassigned. The store
/// derives its storage key from the hyphenated string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(Uuid);

impl BoardId {
    /// Create a new random BoardId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use lifeboard_core::BoardId;
    ///
    /// let id1 = BoardId::new();
    /// let id2 = BoardId::new();
    /// assert_ne!(id1, id2);
    /// ```
    pub fn new() -> Self {
        BoardId(Uuid::new_v4())
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BoardId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(BoardId)
            .map_err(|_| Error::InvalidBoardId(s.to_string()))
    }
}
