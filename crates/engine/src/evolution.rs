//! Multi-generation driver

use lifeboard_core::Grid;

use crate::transition::step;

/// Advance `grid` by exactly `steps` generations.
///
/// `advance(g, 0)` returns a copy of `g`. Intermediate generations are
/// dropped as soon as the next one is computed.
pub fn advance(grid: &Grid, steps: u32) -> Grid {
    let mut current = grid.clone();
    for _ in 0..steps {
        current = step(&current);
    }
    current
}
