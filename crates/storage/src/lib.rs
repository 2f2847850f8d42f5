//! Storage layer for Lifeboard
//!
//! This crate implements the board store gateway with:
//! - [`BoardStore`]: load/save by [`BoardId`](lifeboard_core::BoardId)
//! - [`MemoryStore`]: sharded in-memory backend
//! - [`DirStore`]: one JSON file per board in a directory
//! - [`format`]: the persisted record encoding shared by backends

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dir;
pub mod error;
pub mod format;
pub mod sharded;
pub mod traits;

pub use dir::DirStore;
pub use error::{Result, StorageError};
pub use sharded::MemoryStore;
pub use traits::BoardStore;
