//! The board store gateway
//!
//! The engine needs exactly two things from persistence: load a board by id
//! and save a board under its id. Everything else here is housekeeping for
//! front ends.

use lifeboard_core::{Board, BoardId};

use crate::error::{Result, StorageError};

/// Key-value store of boards keyed by [`BoardId`].
///
/// Implementations only guarantee single-key read and replace. Callers that
/// need load-compute-save to be atomic per board must serialize access
/// themselves (see `lifeboard-concurrency`).
pub trait BoardStore: Send + Sync {
    /// Load the board stored under `id`.
    ///
    /// Fails with [`StorageError::NotFound`] when nothing is stored.
    fn load(&self, id: &BoardId) -> Result<Board>;

    /// Upsert `board` under `board.id()`, replacing any earlier state.
    fn save(&self, board: &Board) -> Result<()>;

    /// Remove the board stored under `id`. Returns whether it existed.
    fn delete(&self, id: &BoardId) -> Result<bool>;

    /// Whether a board is stored under `id`.
    fn contains(&self, id: &BoardId) -> Result<bool> {
        match self.load(id) {
            Ok(_) => Ok(true),
            Err(StorageError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// All stored identifiers, sorted.
    fn ids(&self) -> Result<Vec<BoardId>>;
}
