#![warn(clippy::all, clippy::pedantic)]

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{PhysicsError, PhysicsResult};

/// A single occupancy value: 0 is empty, 1 is occupied.
pub type Cell = u8;

pub const EMPTY: Cell = 0;
pub const FILLED: Cell = 1;

/// Rectangular binary occupancy matrix, stored row-major.
///
/// Used both for the field and for every rotation state of a figure. A grid
/// always has at least one row and all rows share the same non-zero length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Validates an explicit nested sequence.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> PhysicsResult<Self> {
        let Some(first) = rows.first() else {
            return Err(PhysicsError::Shape("grid has no rows".into()));
        };
        let width = first.len();
        if width == 0 {
            return Err(PhysicsError::Shape("grid rows are empty".into()));
        }

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(PhysicsError::Shape(format!(
                    "row {row_idx} has {} cells, expected {width}",
                    row.len()
                )));
            }
            if let Some(col_idx) = row.iter().position(|&cell| cell > FILLED) {
                return Err(PhysicsError::Shape(format!(
                    "cell ({col_idx}, {row_idx}) holds {}, expected 0 or 1",
                    row[col_idx]
                )));
            }
        }

        Ok(Self { rows })
    }

    /// All-zero grid of `height` rows by `width` columns.
    pub fn empty(width: usize, height: usize) -> PhysicsResult<Self> {
        if width == 0 || height == 0 {
            return Err(PhysicsError::Dimension { width, height });
        }
        Ok(Self::zeroed(width, height))
    }

    // Callers guarantee both dimensions are positive.
    pub(crate) fn zeroed(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![EMPTY; width]; height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&[Cell]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    /// Cell at column `x`, row `y`, if inside the grid.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Row-relative `(col, row)` offsets of every occupied cell, row-major.
    pub fn opaque_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell != EMPTY)
                .map(move |(col_idx, _)| (col_idx, row_idx))
        })
    }

    #[must_use]
    pub fn is_row_full(&self, idx: usize) -> bool {
        self.row(idx)
            .is_some_and(|row| row.iter().all(|&cell| cell != EMPTY))
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.rows.iter().flatten().all(|&cell| cell == EMPTY)
    }
}

impl Index<usize> for Grid {
    type Output = [Cell];

    fn index(&self, idx: usize) -> &Self::Output {
        &self.rows[idx]
    }
}

impl IndexMut<usize> for Grid {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.rows[idx]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
