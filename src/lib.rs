//! # Lifeboard
//!
//! Stored Game of Life boards: upload a board, then ask for its next
//! generation, its state N generations ahead, or its long-run fixed point or
//! cycle.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lifeboard::prelude::*;
//!
//! let boards = Lifeboard::builder()
//!     .path("./boards")
//!     .max_final_attempts(1000)
//!     .open()?;
//!
//! let id = boards.upload(&BoardRecord::new(3, 3, state))?;
//! let board = boards.next(&id)?;
//! let board = boards.future(&id, 5)?;
//!
//! match boards.final_state(&id) {
//!     Ok((board, Outcome::Stable)) => println!("fixed point"),
//!     Ok((board, Outcome::Cycle)) => println!("oscillates"),
//!     Err(e) if e.is_not_stabilized() => println!("still evolving"),
//!     Err(e) => return Err(e),
//! }
//! ```
//!
//! ## Layers
//!
//! - [`lifeboard_core`] - grids, fingerprints, boards and ids
//! - [`lifeboard_engine`] - transition, evolution and stabilization search
//! - [`lifeboard_storage`] - the board store gateway and its backends
//! - [`lifeboard_concurrency`] - per-board locking
//!
//! This crate ties them together behind [`Lifeboard`].

#![warn(missing_docs)]

mod config;
mod error;
mod service;

pub mod prelude;

// Re-export main entry points
pub use config::{Config, DEFAULT_MAX_FINAL_ATTEMPTS};
pub use error::{Error, Result};
pub use service::{Lifeboard, LifeboardBuilder};

// Re-export types
pub use lifeboard_core::{Board, BoardId, BoardRecord, Fingerprint, Grid};
pub use lifeboard_engine::Outcome;
pub use lifeboard_storage::{BoardStore, DirStore, MemoryStore};
