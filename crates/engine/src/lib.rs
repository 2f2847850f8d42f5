//! Evolution engine for Lifeboard
//!
//! Pure, synchronous functions over [`Grid`](lifeboard_core::Grid):
//! - [`step`]: one generation under B3/S23 with dead borders
//! - [`advance`]: exactly N generations
//! - [`find_final_state`]: bounded fixed-point / cycle search
//!
//! Nothing here performs I/O or takes locks; callers own persistence and
//! per-board serialization.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod evolution;
pub mod stabilize;
pub mod transition;

pub use evolution::advance;
pub use stabilize::{find_final_state, Exhausted, Outcome, Stabilized};
pub use transition::{live_neighbours, next_cell, step};
