//! Core types for Lifeboard
//!
//! This crate defines the fundamental types shared by every other crate:
//! - [`BoardId`]: Unique identifier for a stored board
//! - [`Grid`]: Dense row-major boolean grid
//! - [`Fingerprint`]: Exact canonical encoding of a grid
//! - [`Board`] / [`BoardRecord`]: Addressable board and its persisted form

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod board;
pub mod error;
pub mod fingerprint;
pub mod grid;
pub mod types;

pub use board::{Board, BoardRecord};
pub use error::{Error, Result};
pub use fingerprint::Fingerprint;
pub use grid::Grid;
pub use types::BoardId;
