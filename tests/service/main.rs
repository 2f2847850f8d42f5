//! Service Integration Tests
//!
//! Exercises the `Lifeboard` boundary end to end over an in-memory store:
//! upload validation, evolution, final-state search and per-board locking.
//!
//! ```bash
//! cargo test --test service
//! cargo test --test service final_state::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod configuration;
mod evolution;
mod final_state;
