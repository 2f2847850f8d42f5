//! Boards and their persisted record form
//!
//! A [`Board`] pairs a [`BoardId`] with the [`Grid`] holding its current
//! generation. Its dimensions are fixed when the board is built and every
//! later state replacement must keep them.
//!
//! [`BoardRecord`] is the serialized shape: `rows`, `columns` and the nested
//! `state` rows. It is what callers upload and what stores persist; the
//! identifier lives in the storage key, never in the record body.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::types::BoardId;

/// Board payload as uploaded and as persisted.
///
/// Dimensions are signed so that non-positive input can be represented and
/// rejected by [`BoardRecord::validate`] rather than failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    /// Declared number of rows
    pub rows: i64,
    /// Declared number of columns
    pub columns: i64,
    /// Row-major nested cell values
    pub state: Vec<Vec<bool>>,
}

impl BoardRecord {
    /// Create a record from parts.
    pub fn new(rows: i64, columns: i64, state: Vec<Vec<bool>>) -> Self {
        Self {
            rows,
            columns,
            state,
        }
    }

    /// Check dimensions are positive and `state` matches them exactly.
    pub fn validate(&self) -> Result<()> {
        if self.rows <= 0 || self.columns <= 0 {
            return Err(Error::InvalidBoard(
                "rows and columns must be positive integers".to_string(),
            ));
        }

        let columns = self.columns as usize;
        if self.state.len() as i64 != self.rows || self.state.iter().any(|row| row.len() != columns)
        {
            return Err(Error::InvalidBoard(format!(
                "state dimensions must match {}x{}",
                self.rows, self.columns
            )));
        }

        Ok(())
    }

    /// Validate and convert to a grid.
    pub fn to_grid(&self) -> Result<Grid> {
        self.validate()?;
        Grid::from_rows(&self.state)
    }
}

impl From<&Grid> for BoardRecord {
    fn from(grid: &Grid) -> Self {
        Self {
            rows: grid.rows() as i64,
            columns: grid.columns() as i64,
            state: grid.to_rows(),
        }
    }
}

/// A stored, addressable board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    id: BoardId,
    grid: Grid,
}

impl Board {
    /// Build a board from a validated record.
    pub fn from_record(id: BoardId, record: &BoardRecord) -> Result<Self> {
        Ok(Self {
            id,
            grid: record.to_grid()?,
        })
    }

    /// Build a board directly from a grid.
    ///
    /// The grid must have at least one row and one column.
    pub fn from_grid(id: BoardId, grid: Grid) -> Result<Self> {
        if grid.rows() == 0 || grid.columns() == 0 {
            return Err(Error::InvalidBoard(
                "rows and columns must be positive integers".to_string(),
            ));
        }
        Ok(Self { id, grid })
    }

    /// Record form for persistence or output.
    pub fn to_record(&self) -> BoardRecord {
        BoardRecord::from(&self.grid)
    }

    /// Identifier
    pub fn id(&self) -> BoardId {
        self.id
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Current generation
    pub fn state(&self) -> &Grid {
        &self.grid
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Replace the current generation.
    ///
    /// Rejects grids whose shape differs from the board's.
    pub fn replace_state(&mut self, grid: Grid) -> Result<()> {
        if grid.shape() != self.grid.shape() {
            return Err(Error::ShapeMismatch {
                expected: self.grid.len(),
                actual: grid.len(),
            });
        }
        self.grid = grid;
        Ok(())
    }
}
