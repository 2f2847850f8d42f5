//! Sharded in-memory board store
//!
//! # Design
//!
//! - DashMap: 16-way sharded by default, lock-free reads
//! - One entry per board, holding its persisted [`BoardRecord`]
//! - Different boards only contend when they hash to the same shard, and
//!   then only for the duration of a map operation
//!
//! The store keeps records rather than [`Board`] values so that what is held
//! in memory is exactly what a networked or on-disk backend would hold.

use dashmap::DashMap;
use lifeboard_core::{Board, BoardId, BoardRecord};
use tracing::trace;

use crate::error::{Result, StorageError};
use crate::format::board_from_record;
use crate::traits::BoardStore;

/// In-memory [`BoardStore`] backed by a sharded map.
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - load(): Lock-free read via DashMap
/// - save(): Only locks the target shard
///
/// # Example
///
/// ```
/// use lifeboard_core::{Board, BoardId, Grid};
/// use lifeboard_storage::{BoardStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// let board = Board::from_grid(BoardId::new(), Grid::dead(2, 2)).unwrap();
/// store.save(&board).unwrap();
/// assert_eq!(store.load(&board.id()).unwrap(), board);
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    boards: DashMap<BoardId, BoardRecord>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            boards: DashMap::new(),
        }
    }

    /// Number of stored boards
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Check if no boards are stored
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore for MemoryStore {
    fn load(&self, id: &BoardId) -> Result<Board> {
        let record = self
            .boards
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(StorageError::NotFound(*id))?;
        board_from_record(*id, &record)
    }

    fn save(&self, board: &Board) -> Result<()> {
        self.boards.insert(board.id(), board.to_record());
        trace!(board_id = %board.id(), "saved board");
        Ok(())
    }

    fn delete(&self, id: &BoardId) -> Result<bool> {
        Ok(self.boards.remove(id).is_some())
    }

    fn contains(&self, id: &BoardId) -> Result<bool> {
        Ok(self.boards.contains_key(id))
    }

    fn ids(&self) -> Result<Vec<BoardId>> {
        let mut ids: Vec<BoardId> = self.boards.iter().map(|entry| *entry.key()).collect();
        ids.sort();
        Ok(ids)
    }
}
