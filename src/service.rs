//! Main service entry point for Lifeboard.
//!
//! This module provides the [`Lifeboard`] struct, the boundary through which
//! boards are uploaded and evolved.

use lifeboard_concurrency::BoardLocks;
use lifeboard_core::{Board, BoardId, BoardRecord, Grid};
use lifeboard_engine::{advance, find_final_state, step, Outcome};
use lifeboard_storage::{BoardStore, DirStore, MemoryStore};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};

/// The Lifeboard service.
///
/// Wraps a [`BoardStore`] with validation, per-board locking and the
/// evolution engine. Every evolving operation runs load, compute and save as
/// one unit with respect to other operations on the same board; operations
/// on different boards run in parallel.
///
/// # Example
///
/// ```ignore
/// use lifeboard::prelude::*;
///
/// let boards = Lifeboard::in_memory();
/// let id = boards.upload(&BoardRecord::new(3, 3, blinker))?;
///
/// let board = boards.next(&id)?;
/// let board = boards.future(&id, 10)?;
/// let (board, outcome) = boards.final_state(&id)?;
/// ```
pub struct Lifeboard {
    store: Arc<dyn BoardStore>,
    locks: BoardLocks,
    max_final_attempts: u32,
}

impl Lifeboard {
    /// Open a service storing boards as files under `path`.
    ///
    /// Uses the default final-state attempt ceiling.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Create a service backed by a fresh in-memory store.
    ///
    /// All boards are lost when the service is dropped.
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            locks: BoardLocks::new(),
            max_final_attempts: crate::config::DEFAULT_MAX_FINAL_ATTEMPTS,
        }
    }

    /// Create a builder for service configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let boards = Lifeboard::builder()
    ///     .path("./boards")
    ///     .max_final_attempts(250)
    ///     .open()?;
    /// ```
    pub fn builder() -> LifeboardBuilder {
        LifeboardBuilder::new()
    }

    /// Ceiling on transitions explored by [`Lifeboard::final_state`]
    pub fn max_final_attempts(&self) -> u32 {
        self.max_final_attempts
    }

    // =========================================================================
    // Boundary operations
    // =========================================================================

    /// Validate and store a new board, returning its assigned id.
    ///
    /// Fails with [`Error::InvalidBoard`] when dimensions are not positive or
    /// `state` does not match them.
    pub fn upload(&self, record: &BoardRecord) -> Result<BoardId> {
        let board = Board::from_record(BoardId::new(), record)?;
        let id = board.id();
        self.locks.with_board(&id, || self.store.save(&board))?;
        info!(
            board_id = %id,
            rows = board.rows(),
            columns = board.columns(),
            "Uploaded board"
        );
        Ok(id)
    }

    /// Read a board without evolving it.
    pub fn get(&self, id: &BoardId) -> Result<Board> {
        Ok(self.store.load(id)?)
    }

    /// Advance a board by one generation and persist it.
    pub fn next(&self, id: &BoardId) -> Result<Board> {
        let (board, ()) = self.evolve(id, |grid| Ok((step(grid), ())))?;
        debug!(board_id = %id, "Advanced board one generation");
        Ok(board)
    }

    /// Advance a board by `steps` generations and persist only the result.
    ///
    /// Fails with [`Error::InvalidSteps`] unless `steps` is positive; the
    /// board is not touched in that case.
    pub fn future(&self, id: &BoardId, steps: i64) -> Result<Board> {
        let steps = match u32::try_from(steps) {
            Ok(n) if n > 0 => n,
            _ => return Err(Error::InvalidSteps(steps)),
        };
        let (board, ()) = self.evolve(id, |grid| Ok((advance(grid, steps), ())))?;
        debug!(board_id = %id, steps, "Advanced board");
        Ok(board)
    }

    /// Search for the board's fixed point or cycle and persist it.
    ///
    /// On [`Error::NotStabilized`] nothing is persisted and the board keeps
    /// its previous state.
    pub fn final_state(&self, id: &BoardId) -> Result<(Board, Outcome)> {
        let max_attempts = self.max_final_attempts;
        let result = self.evolve(id, |grid| {
            let found = find_final_state(grid, max_attempts)?;
            Ok((found.grid, (found.outcome, found.generations)))
        });

        match result {
            Ok((board, (outcome, generations))) => {
                info!(board_id = %id, %outcome, generations, "Final state detected");
                Ok((board, outcome))
            }
            Err(e @ Error::NotStabilized { .. }) => {
                warn!(board_id = %id, max_attempts, "Board did not stabilize");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // Housekeeping
    // =========================================================================

    /// Remove a board. Returns whether it existed.
    pub fn delete(&self, id: &BoardId) -> Result<bool> {
        let deleted = self.locks.with_board(id, || self.store.delete(id))?;
        self.locks.prune(id);
        if deleted {
            info!(board_id = %id, "Deleted board");
        }
        Ok(deleted)
    }

    /// Identifiers of all stored boards, sorted.
    pub fn list(&self) -> Result<Vec<BoardId>> {
        Ok(self.store.ids()?)
    }

    /// Load, transform and save one board under its lock.
    fn evolve<T>(
        &self,
        id: &BoardId,
        compute: impl FnOnce(&Grid) -> Result<(Grid, T)>,
    ) -> Result<(Board, T)> {
        let result = self.locks.with_board(id, || {
            let mut board = self.store.load(id)?;
            let (grid, extra) = compute(board.state())?;
            board.replace_state(grid)?;
            self.store.save(&board)?;
            Ok((board, extra))
        });
        // Unknown ids must not leave a lock entry behind.
        if matches!(result, Err(Error::NotFound(_))) {
            self.locks.prune(id);
        }
        result
    }
}

/// Builder for service configuration.
///
/// # Example
///
/// ```ignore
/// // Disk-backed
/// let boards = Lifeboard::builder().path("./boards").open()?;
///
/// // From a TOML file
/// let boards = Lifeboard::builder()
///     .config(Config::load("lifeboard.toml")?)
///     .open()?;
///
/// // Custom gateway
/// let boards = Lifeboard::builder().store(Arc::new(MyStore::new())).open()?;
/// ```
pub struct LifeboardBuilder {
    config: Config,
    store: Option<Arc<dyn BoardStore>>,
}

impl LifeboardBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            store: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Store boards as files under `path`.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Store boards in memory (default).
    pub fn in_memory(mut self) -> Self {
        self.config.data_dir = None;
        self
    }

    /// Set the final-state attempt ceiling. Must be positive.
    pub fn max_final_attempts(mut self, attempts: u32) -> Self {
        self.config.max_final_attempts = attempts;
        self
    }

    /// Use a caller-supplied store, ignoring any configured directory.
    pub fn store(mut self, store: Arc<dyn BoardStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Validate the configuration and build the service.
    pub fn open(self) -> Result<Lifeboard> {
        self.config.validate()?;

        let store: Arc<dyn BoardStore> = match (self.store, &self.config.data_dir) {
            (Some(store), _) => store,
            (None, Some(dir)) => Arc::new(DirStore::open(dir)?),
            (None, None) => Arc::new(MemoryStore::new()),
        };

        Ok(Lifeboard {
            store,
            locks: BoardLocks::new(),
            max_final_attempts: self.config.max_final_attempts,
        })
    }
}

impl Default for LifeboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
