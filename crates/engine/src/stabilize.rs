//! Bounded search for a fixed point or cycle
//!
//! ## Algorithm
//!
//! ```text
//! seen = {}, current = input, generations = 0
//! loop:
//!   fingerprint(current) in seen        -> Cycle  (return current)
//!   generations == max_attempts         -> Exhausted
//!   next = step(current)
//!   fingerprint(next) == fingerprint(current) -> Stable (return current)
//!   seen += fingerprint(current); current = next; generations += 1
//! ```
//!
//! The seen-check runs before the budget check, so a repeat reached by the
//! last permitted transition is still reported as a cycle. `max_attempts`
//! therefore bounds the number of transitions applied, and total work is
//! `O(max_attempts * rows * columns)`.
//!
//! A fixed point is caught by the stable check on the iteration that first
//! reaches it, so it is never misreported as a cycle of length one.

use std::collections::HashSet;

use lifeboard_core::{Fingerprint, Grid};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::transition::step;

/// How the search ended successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// `step(grid) == grid`
    Stable,
    /// The grid repeats an earlier generation with period of at least 2
    Cycle,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Stable => write!(f, "stable"),
            Outcome::Cycle => write!(f, "cycle"),
        }
    }
}

/// Successful search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stabilized {
    /// Fixed point, or the cycle state current when the repeat was detected
    pub grid: Grid,
    /// Whether the search found a fixed point or a cycle
    pub outcome: Outcome,
    /// Generations between the input and `grid`
    pub generations: u32,
}

/// The search used its whole budget without finding a fixed point or cycle.
///
/// Carries the last generation reached so engine-level callers can inspect
/// it; the service layer discards it and persists nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("board did not stabilize after {attempts} attempts")]
pub struct Exhausted {
    /// Transitions applied before giving up
    pub attempts: u32,
    /// Generation reached when the budget ran out
    pub last: Grid,
}

/// Search for the long-run state of `grid` within `max_attempts` transitions.
pub fn find_final_state(grid: &Grid, max_attempts: u32) -> Result<Stabilized, Exhausted> {
    let mut seen: HashSet<Fingerprint> = HashSet::new();
    let mut current = grid.clone();
    let mut current_fp = current.fingerprint();
    let mut generations = 0u32;

    loop {
        if seen.contains(&current_fp) {
            trace!(generations, "repeat detected");
            return Ok(Stabilized {
                grid: current,
                outcome: Outcome::Cycle,
                generations,
            });
        }

        if generations >= max_attempts {
            return Err(Exhausted {
                attempts: generations,
                last: current,
            });
        }

        let next = step(&current);
        let next_fp = next.fingerprint();
        if next_fp == current_fp {
            trace!(generations, "fixed point reached");
            return Ok(Stabilized {
                grid: current,
                outcome: Outcome::Stable,
                generations,
            });
        }

        seen.insert(current_fp);
        current = next;
        current_fp = next_fp;
        generations += 1;
    }
}
