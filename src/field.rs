#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow wrapping casts between usize and i32 since field and figure dimensions are small
    clippy::cast_possible_wrap,
    // Allow sign loss when casting to usize since coordinates are checked to be non-negative first
    clippy::cast_sign_loss
)]

use std::fmt;

use crate::error::{PhysicsError, PhysicsResult};
use crate::figure::Figure;
use crate::game::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::grid::{Cell, EMPTY, Grid};
use crate::interactor::Position;

/// The playing grid holding every locked cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    grid: Grid,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            grid: Grid::zeroed(FIELD_WIDTH, FIELD_HEIGHT),
        }
    }
}

impl Field {
    pub fn new(width: usize, height: usize) -> PhysicsResult<Self> {
        Ok(Self {
            grid: Grid::empty(width, height)?,
        })
    }

    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&[Cell]> {
        self.grid.row(idx)
    }

    // Field coordinates of a figure cell, or the raw offending coordinates.
    fn absolute(
        &self,
        position: Position,
        col: usize,
        row: usize,
    ) -> Result<(usize, usize), (i32, i32)> {
        let x = position.x + col as i32;
        let y = position.y + row as i32;
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return Err((x, y));
        }
        Ok((x as usize, y as usize))
    }

    /// Fails if any opaque cell of the figure's current rotation lies outside
    /// the field. Transparent cells are never checked.
    pub fn validate_figure_borders(&self, figure: &Figure, position: Position) -> PhysicsResult<()> {
        let state = figure.get_current_state()?;
        for (col, row) in state.opaque_cells() {
            if let Err((x, y)) = self.absolute(position, col, row) {
                return Err(PhysicsError::OutOfBorder { col: x, row: y });
            }
        }
        Ok(())
    }

    /// Border check followed by an occupancy check for every opaque cell.
    pub fn validate_figure_field_has_no_intersections(
        &self,
        figure: &Figure,
        position: Position,
    ) -> PhysicsResult<()> {
        self.validate_figure_borders(figure, position)?;
        let state = figure.get_current_state()?;
        for (col, row) in state.opaque_cells() {
            let (x, y) = self
                .absolute(position, col, row)
                .map_err(|(x, y)| PhysicsError::OutOfBorder { col: x, row: y })?;
            if self.grid[y][x] != EMPTY {
                return Err(PhysicsError::Intersection {
                    col: x as i32,
                    row: y as i32,
                });
            }
        }
        Ok(())
    }

    /// Stamps the figure into the field. Nothing is written unless every
    /// opaque cell passes both checks.
    pub fn update_field_state(&mut self, figure: &Figure, position: Position) -> PhysicsResult<()> {
        self.validate_figure_field_has_no_intersections(figure, position)?;
        let state = figure.get_current_state()?;
        for (col, row) in state.opaque_cells() {
            if let Ok((x, y)) = self.absolute(position, col, row) {
                self.grid[y][x] = state[row][col];
            }
        }
        Ok(())
    }

    pub fn make_row_empty(&mut self, idx: usize) -> PhysicsResult<()> {
        if idx >= self.height() {
            return Err(PhysicsError::RowOutOfRange {
                idx,
                height: self.height(),
            });
        }
        self.grid[idx].fill(EMPTY);
        Ok(())
    }

    /// Drops every row above `idx` by one, overwriting `idx`, and empties the
    /// top row.
    pub fn collapse_row(&mut self, idx: usize) -> PhysicsResult<()> {
        if idx >= self.height() {
            return Err(PhysicsError::RowOutOfRange {
                idx,
                height: self.height(),
            });
        }
        for row in (0..idx).rev() {
            let above = self.grid[row].to_vec();
            self.grid[row + 1].copy_from_slice(&above);
        }
        self.make_row_empty(0)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
