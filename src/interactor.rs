#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow wrapping casts between usize and i32 since field and figure dimensions are small
    clippy::cast_possible_wrap,
    // Allow sign loss when casting to usize since coordinates are checked to be non-negative first
    clippy::cast_sign_loss
)]

use log::debug;

use crate::error::{PhysicsError, PhysicsResult};
use crate::field::Field;
use crate::figure::{Figure, RotationKey};
use crate::grid::Grid;
use crate::scoring::{ClearEvent, ScoreRecord};

/// Top-left anchor of the active figure's current rotation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Owns the field, the active figure and its position.
///
/// Every change of position or rotation is validated against the field before
/// it sticks; failures are handed back to the caller untouched.
#[derive(Debug, Default)]
pub struct PhysicalInteractor {
    field: Field,
    current_figure: Option<Figure>,
    figure_position: Option<Position>,
    lines_scored: ScoreRecord,
}

impl PhysicalInteractor {
    #[must_use]
    pub fn new(field: Field) -> Self {
        Self::with_record(field, ScoreRecord::new())
    }

    /// Interactor appending its clear events to an existing shared record.
    #[must_use]
    pub fn with_record(field: Field, lines_scored: ScoreRecord) -> Self {
        Self {
            field,
            current_figure: None,
            figure_position: None,
            lines_scored,
        }
    }

    /// Makes `figure` the active figure at `position`. On a border or
    /// intersection failure the previous figure and position are kept.
    pub fn place_figure(&mut self, figure: Figure, position: Position) -> PhysicsResult<()> {
        self.field
            .validate_figure_field_has_no_intersections(&figure, position)?;
        self.current_figure = Some(figure);
        self.figure_position = Some(position);
        Ok(())
    }

    /// Moves the active figure to `position` after validating it there.
    pub fn move_figure(&mut self, position: Position) -> PhysicsResult<()> {
        let figure = self.get_current_figure()?;
        self.field
            .validate_figure_field_has_no_intersections(figure, position)?;
        self.figure_position = Some(position);
        Ok(())
    }

    /// Switches the active figure's rotation and revalidates the unchanged
    /// position. On failure the new rotation stays selected so the caller can
    /// decide how to revert.
    pub fn change_figure_state(&mut self, key: RotationKey) -> PhysicsResult<()> {
        let position = self.get_current_figure_pos()?;
        let figure = self
            .current_figure
            .as_mut()
            .ok_or(PhysicsError::NotReady("current figure"))?;
        figure.change_state_by_key(key);
        self.field
            .validate_figure_field_has_no_intersections(figure, position)
    }

    /// Locks the active figure into the field and empties the active slot.
    pub fn update_field_state(&mut self) -> PhysicsResult<()> {
        let position = self.get_current_figure_pos()?;
        let figure = self
            .current_figure
            .as_ref()
            .ok_or(PhysicsError::NotReady("current figure"))?;
        self.field.update_field_state(figure, position)?;
        debug!("Figure locked at ({}, {})", position.x, position.y);
        self.current_figure = None;
        self.figure_position = None;
        Ok(())
    }

    /// Field cells overlaid with the active figure. Never mutates state.
    pub fn map_figure_to_field(&self) -> PhysicsResult<Grid> {
        let figure = self.get_current_figure()?;
        let position = self.get_current_figure_pos()?;
        let state = figure.get_current_state()?;
        let mut rendered = self.field.grid().clone();
        for (col, row) in state.opaque_cells() {
            let x = position.x + col as i32;
            let y = position.y + row as i32;
            if x < 0 || y < 0 || x as usize >= rendered.width() || y as usize >= rendered.height()
            {
                continue;
            }
            rendered[y as usize][x as usize] = state[row][col];
        }
        Ok(rendered)
    }

    /// Like [`map_figure_to_field`](Self::map_figure_to_field) but falls back
    /// to the bare field when no figure is active.
    #[must_use]
    pub fn rendered_field(&self) -> Grid {
        self.map_figure_to_field()
            .unwrap_or_else(|_| self.field.grid().clone())
    }

    /// Clears every full row and collapses the rows above it.
    ///
    /// Returns the run lengths of consecutive full rows in scan order; the
    /// result is also appended to the lines-scored record when non-empty.
    pub fn count_and_clear_lines(&mut self) -> PhysicsResult<ClearEvent> {
        let grid = self.field.grid();
        let mut full_rows = Vec::new();
        let mut runs = Vec::new();
        let mut run = 0;

        for row_idx in 0..grid.height() {
            if grid.is_row_full(row_idx) {
                full_rows.push(row_idx);
                run += 1;
            } else if run > 0 {
                runs.push(run);
                run = 0;
            }
        }
        if run > 0 {
            runs.push(run);
        }

        // Rows are processed top to bottom, so earlier indices stay valid.
        for &row_idx in &full_rows {
            self.field.collapse_row(row_idx)?;
        }

        if !runs.is_empty() {
            debug!("Cleared rows {full_rows:?} as runs {runs:?}");
            self.lines_scored.append(runs.clone());
        }
        Ok(runs)
    }

    #[must_use]
    pub fn get_current_field_state(&self) -> &Field {
        &self.field
    }

    pub fn get_current_figure(&self) -> PhysicsResult<&Figure> {
        self.current_figure
            .as_ref()
            .ok_or(PhysicsError::NotReady("current figure"))
    }

    pub fn get_current_figure_pos(&self) -> PhysicsResult<Position> {
        self.figure_position
            .ok_or(PhysicsError::NotReady("figure position"))
    }

    #[must_use]
    pub fn has_figure(&self) -> bool {
        self.current_figure.is_some()
    }

    #[must_use]
    pub fn lines_scored(&self) -> &ScoreRecord {
        &self.lines_scored
    }
}
