//! Keyed lock table
//!
//! ## Locking Sequence
//!
//! ```text
//! 1. Look up (or create) the board's mutex in the sharded table
//! 2. Clone its Arc and release the table shard
//! 3. Lock the mutex; run load -> compute -> save
//! 4. Drop the guard
//! ```
//!
//! Step 2 matters: the table shard is held only for the lookup, never while
//! a board operation runs, so a slow final-state search on one board cannot
//! stall an unrelated board that happens to share its shard.

use dashmap::DashMap;
use lifeboard_core::BoardId;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

/// Table of per-board mutexes.
///
/// # Thread Safety
///
/// Operations on the same [`BoardId`] are serialized. Operations on
/// different ids proceed in parallel.
///
/// Entries are created on first use and live until [`BoardLocks::prune`]
/// removes them.
#[derive(Debug, Default)]
pub struct BoardLocks {
    locks: DashMap<BoardId, Arc<Mutex<()>>>,
}

impl BoardLocks {
    /// Create an empty lock table
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    fn lock_for(&self, id: &BoardId) -> Arc<Mutex<()>> {
        self.locks
            .entry(*id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Run `f` while holding the lock for `id`, blocking until it is free.
    pub fn with_board<R>(&self, id: &BoardId, f: impl FnOnce() -> R) -> R {
        let lock = self.lock_for(id);
        let _guard = match lock.try_lock() {
            Some(guard) => guard,
            None => {
                trace!(board_id = %id, "waiting for board lock");
                lock.lock()
            }
        };
        f()
    }

    /// Drop the table entry for `id` if no operation holds or awaits it.
    ///
    /// Call after the board's last operation has returned (for example after
    /// deleting it). Returns whether the entry was removed.
    pub fn prune(&self, id: &BoardId) -> bool {
        self.locks
            .remove_if(id, |_, lock| Arc::strong_count(lock) == 1)
            .is_some()
    }

    /// Number of boards with a table entry
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
