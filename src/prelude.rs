//! Convenient imports for Lifeboard.
//!
//! ```ignore
//! use lifeboard::prelude::*;
//!
//! let boards = Lifeboard::in_memory();
//! ```

// Main entry point
pub use crate::service::{Lifeboard, LifeboardBuilder};

// Configuration
pub use crate::config::Config;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use lifeboard_core::{Board, BoardId, BoardRecord, Fingerprint, Grid};

// Search outcome
pub use lifeboard_engine::Outcome;
