//! Shared helpers for integration tests.

#![allow(dead_code)]

use lifeboard::{BoardRecord, Fingerprint, Lifeboard};
use tempfile::TempDir;

/// Build a record from `1`/`0` rows such as `"010,010,010"`.
pub fn record(rows: &str) -> BoardRecord {
    let grid = Fingerprint::parse_grid(rows).expect("test board");
    BoardRecord::new(grid.rows() as i64, grid.columns() as i64, grid.to_rows())
}

/// Horizontal blinker, period 2.
pub fn blinker() -> BoardRecord {
    record("000,111,000")
}

pub fn vertical_blinker() -> BoardRecord {
    record("010,010,010")
}

/// 2x2 block, a still life.
pub fn block() -> BoardRecord {
    record("0000,0110,0110,0000")
}

/// Glider heading south-east on a 5x5 board; settles into a block.
pub fn glider() -> BoardRecord {
    record("01000,00100,11100,00000,00000")
}

/// Service over a fresh in-memory store.
pub fn memory_service() -> Lifeboard {
    Lifeboard::builder()
        .in_memory()
        .open()
        .expect("Failed to create in-memory service")
}

/// Service over a fresh directory store. Keep the `TempDir` alive.
pub fn dir_service() -> (TempDir, Lifeboard) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let boards = Lifeboard::open(dir.path()).expect("Failed to open service");
    (dir, boards)
}

/// Fingerprint text of a stored board.
pub fn stored_rows(boards: &Lifeboard, id: &lifeboard::BoardId) -> String {
    boards.get(id).expect("board exists").state().fingerprint().to_string()
}
