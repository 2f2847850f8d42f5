//! Concurrency layer for Lifeboard
//!
//! Every operation that reads, evolves and rewrites a board must run as one
//! unit with respect to other operations on the same board, or two
//! concurrent `next` calls could both load generation N and one write would
//! be lost. [`BoardLocks`] provides that exclusion keyed by board id, so
//! operations on different boards never wait on each other.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod manager;

pub use manager::BoardLocks;
