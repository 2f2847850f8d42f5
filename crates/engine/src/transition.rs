//! One-generation transition under the classic B3/S23 rule
//!
//! Neighbours are the eight cells at Chebyshev distance 1. Coordinates
//! outside the grid count as dead; there is no wraparound.

use lifeboard_core::Grid;

/// Offsets of the Moore neighbourhood, excluding the cell itself.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Compute the next generation of `grid`.
///
/// Pure: the input is untouched and the result always has the same shape.
/// A live cell survives with 2 or 3 live neighbours; a dead cell is born
/// with exactly 3.
pub fn step(grid: &Grid) -> Grid {
    Grid::from_fn(grid.rows(), grid.columns(), |row, column| {
        next_cell(grid.is_alive(row, column), live_neighbours(grid, row, column))
    })
}

/// Fate of one cell given its current state and live-neighbour count.
#[inline]
pub fn next_cell(alive: bool, neighbours: u8) -> bool {
    matches!((alive, neighbours), (true, 2) | (_, 3))
}

/// Count live cells around `(row, column)`, treating the outside as dead.
pub fn live_neighbours(grid: &Grid, row: usize, column: usize) -> u8 {
    let mut count = 0;
    for (dr, dc) in NEIGHBOUR_OFFSETS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), column.checked_add_signed(dc)) else {
            continue;
        };
        if grid.get(r, c) == Some(true) {
            count += 1;
        }
    }
    count
}
