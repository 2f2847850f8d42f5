//! Dense boolean grid
//!
//! [`Grid`] is the working representation every engine operation reads and
//! produces: a flat row-major `Vec<bool>` tagged with its `rows` and
//! `columns`. The buffer length always equals `rows * columns`; every
//! constructor checks it, so no code path can observe a ragged grid.

use crate::error::{Error, Result};
use crate::fingerprint::Fingerprint;

/// Rectangular grid of live (`true`) and dead (`false`) cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-dead grid of the given shape.
    pub fn dead(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    /// Build a grid from a flat row-major buffer.
    ///
    /// Fails with [`Error::ShapeMismatch`] unless `cells.len() == rows * columns`.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<bool>) -> Result<Self> {
        let expected = rows * columns;
        if cells.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Build a grid by evaluating `f(row, column)` for every cell.
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(f(row, column));
            }
        }
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Build a grid from nested rows (the persisted form).
    ///
    /// The column count is taken from the first row; every other row must
    /// match it. An empty slice yields a 0×0 grid.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    index,
                    row.len(),
                    columns
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    /// Convert back to nested rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid has no cells at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell at `(row, column)` is alive.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn is_alive(&self, row: usize, column: usize) -> bool {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) outside {}x{} grid",
            row,
            column,
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + column]
    }

    /// Cell value, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Set the cell at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn set(&mut self, row: usize, column: usize, alive: bool) {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) outside {}x{} grid",
            row,
            column,
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + column] = alive;
    }

    /// Flat row-major cell buffer
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Iterate rows top to bottom.
    ///
    /// Works for zero-column grids, where every row is an empty slice.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.rows).map(move |row| self.row(row))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Canonical encoding of the full contents.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self)
    }
}
