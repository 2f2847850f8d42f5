//! Canonical grid fingerprints
//!
//! A fingerprint is the exact text encoding of a grid: one `1`/`0` per cell
//! in row-major order, rows joined by `,`. `[[T,F],[F,T]]` encodes as
//! `"10,01"`. The encoding is not hashed, so two grids of the same shape
//! share a fingerprint iff every cell matches.
//!
//! The same syntax doubles as a compact board literal for the CLI, see
//! [`Fingerprint::parse_grid`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::Grid;

const LIVE: char = '1';
const DEAD: char = '0';
const ROW_SEPARATOR: char = ',';

/// Exact, comparable encoding of a grid's contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint of `grid`.
    pub fn of(grid: &Grid) -> Self {
        let separators = grid.rows().saturating_sub(1);
        let mut encoded = String::with_capacity(grid.len() + separators);
        for (index, row) in grid.iter_rows().enumerate() {
            if index > 0 {
                encoded.push(ROW_SEPARATOR);
            }
            encoded.extend(row.iter().map(|&alive| if alive { LIVE } else { DEAD }));
        }
        Fingerprint(encoded)
    }

    /// The encoded text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode fingerprint text back into a grid.
    ///
    /// The empty string decodes to a 0×0 grid. Rows must all have the same
    /// width and contain only `1` and `0`.
    pub fn parse_grid(text: &str) -> Result<Grid> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Grid::dead(0, 0));
        }

        let rows = text
            .split(ROW_SEPARATOR)
            .map(|row| {
                row.trim()
                    .chars()
                    .map(|c| match c {
                        LIVE => Ok(true),
                        DEAD => Ok(false),
                        other => Err(Error::InvalidFingerprint(format!(
                            "unexpected character '{}'",
                            other
                        ))),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<Vec<bool>>>>()?;

        Grid::from_rows(&rows).map_err(|e| Error::InvalidFingerprint(e.to_string()))
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
