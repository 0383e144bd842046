#![warn(clippy::all, clippy::pedantic)]

use std::fmt;

use crate::error::{PhysicsError, PhysicsResult};
use crate::grid::{Cell, Grid};

/// Selector among a figure's pre-baked rotation shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationKey {
    Normal,
    Left,
    Down,
    Right,
}

impl RotationKey {
    pub const ALL: [RotationKey; 4] = [
        RotationKey::Normal,
        RotationKey::Left,
        RotationKey::Down,
        RotationKey::Right,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            RotationKey::Normal => 0,
            RotationKey::Left => 1,
            RotationKey::Down => 2,
            RotationKey::Right => 3,
        }
    }

    /// Successor in the rotation cycle, wrapping to `Normal`.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Predecessor in the rotation cycle, wrapping to `Right`.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A falling piece: one grid per rotation key plus the selected key.
///
/// A figure is empty until [`Figure::reset`] has been called. Figures built by
/// [`FigureBuilder`] are complete and are cloned on every spawn, so a catalog
/// entry is never shared with a live game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Figure {
    current_key: Option<RotationKey>,
    // Indexed by `RotationKey::index`; empty before `reset`.
    states: Vec<Grid>,
}

impl Figure {
    /// Establishes every rotation key with an empty `width x height` grid and
    /// selects `Normal`.
    pub fn reset(&mut self, width: usize, height: usize) -> PhysicsResult<()> {
        let empty = Grid::empty(width, height)?;
        self.states = vec![empty; RotationKey::ALL.len()];
        self.current_key = Some(RotationKey::Normal);
        Ok(())
    }

    /// Replaces the grid for `key`. The grid must match the dimensions set by
    /// `reset`.
    pub fn set_state(&mut self, key: RotationKey, grid: Grid) -> PhysicsResult<()> {
        let slot = self
            .states
            .get_mut(key.index())
            .ok_or(PhysicsError::NotReady("figure states"))?;
        if slot.width() != grid.width() || slot.height() != grid.height() {
            return Err(PhysicsError::Shape(format!(
                "{key:?} state is {}x{}, figure is {}x{}",
                grid.width(),
                grid.height(),
                slot.width(),
                slot.height()
            )));
        }
        *slot = grid;
        Ok(())
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.states.is_empty()
    }

    pub fn get_current_key(&self) -> PhysicsResult<RotationKey> {
        self.current_key
            .ok_or(PhysicsError::NotReady("figure rotation key"))
    }

    pub fn get_current_state(&self) -> PhysicsResult<&Grid> {
        self.get_state(self.get_current_key()?)
    }

    pub fn get_state(&self, key: RotationKey) -> PhysicsResult<&Grid> {
        self.states
            .get(key.index())
            .ok_or(PhysicsError::NotReady("figure states"))
    }

    pub fn change_state_by_key(&mut self, key: RotationKey) {
        self.current_key = Some(key);
    }

    pub fn width(&self) -> PhysicsResult<usize> {
        Ok(self.get_current_state()?.width())
    }

    pub fn height(&self) -> PhysicsResult<usize> {
        Ok(self.get_current_state()?.height())
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get_current_state() {
            Ok(state) => write!(f, "{state}"),
            Err(_) => write!(f, "<empty figure>"),
        }
    }
}

/// Staged construction of a [`Figure`].
///
/// ```
/// use blockfield::figure::{FigureBuilder, RotationKey};
///
/// let mut builder = FigureBuilder::new();
/// builder.reset(2, 2).unwrap();
/// for key in RotationKey::ALL {
///     builder.set_state(key, vec![vec![1, 1], vec![1, 1]]).unwrap();
/// }
/// let square = builder.get_result().unwrap();
/// assert_eq!(square.width().unwrap(), 2);
/// ```
#[derive(Debug, Default)]
pub struct FigureBuilder {
    figure: Figure,
}

impl FigureBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self, width: usize, height: usize) -> PhysicsResult<&mut Self> {
        self.figure = Figure::default();
        self.figure.reset(width, height)?;
        Ok(self)
    }

    pub fn set_state(
        &mut self,
        key: RotationKey,
        rows: Vec<Vec<Cell>>,
    ) -> PhysicsResult<&mut Self> {
        if !self.figure.is_ready() {
            return Err(PhysicsError::NotReady("builder reset"));
        }
        self.figure.set_state(key, Grid::from_rows(rows)?)?;
        Ok(self)
    }

    pub fn set_current_state(&mut self, key: RotationKey) -> PhysicsResult<&mut Self> {
        if !self.figure.is_ready() {
            return Err(PhysicsError::NotReady("builder reset"));
        }
        self.figure.change_state_by_key(key);
        Ok(self)
    }

    /// Independent copy of the figure built so far.
    pub fn get_result(&self) -> PhysicsResult<Figure> {
        if !self.figure.is_ready() {
            return Err(PhysicsError::NotReady("builder reset"));
        }
        Ok(self.figure.clone())
    }
}
