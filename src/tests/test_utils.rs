use crate::field::Field;
use crate::figure::{Figure, FigureBuilder, RotationKey};
use crate::grid::{Cell, Grid};
use crate::movement::MovementManager;

/// Grid from a literal, panicking on a bad shape.
#[must_use]
pub fn grid(rows: &[&[Cell]]) -> Grid {
    Grid::from_rows(rows.iter().map(|row| row.to_vec()).collect()).expect("valid test grid")
}

/// Field from a literal.
#[must_use]
pub fn field(rows: &[&[Cell]]) -> Field {
    Field::from_grid(grid(rows))
}

/// Figure whose every rotation is the same shape.
#[must_use]
pub fn uniform_figure(rows: &[&[Cell]]) -> Figure {
    figure_with_states([rows, rows, rows, rows])
}

/// Figure with one shape per rotation key, in `RotationKey::ALL` order.
#[must_use]
pub fn figure_with_states(states: [&[&[Cell]]; 4]) -> Figure {
    let height = states[0].len();
    let width = states[0][0].len();
    let mut builder = FigureBuilder::new();
    builder.reset(width, height).expect("reset");
    for (key, rows) in RotationKey::ALL.into_iter().zip(states) {
        builder
            .set_state(key, rows.iter().map(|row| row.to_vec()).collect())
            .expect("set state");
    }
    builder.get_result().expect("built figure")
}

/// 2x2 block.
#[must_use]
pub fn square() -> Figure {
    uniform_figure(&[&[1, 1], &[1, 1]])
}

/// Horizontal bar of four that turns vertical on every other rotation.
#[must_use]
pub fn dash() -> Figure {
    let flat: &[&[Cell]] = &[&[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]];
    let upright: &[&[Cell]] = &[&[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0]];
    figure_with_states([flat, upright, flat, upright])
}

/// Manager over an empty `width x height` field with a single-figure catalog.
/// Gravity fires every `cadence` frames.
#[must_use]
pub fn manager_with(width: usize, height: usize, figure: Figure, cadence: u32) -> MovementManager {
    let field = Field::new(width, height).expect("field");
    let mut manager = MovementManager::new(field, 1, cadence).expect("manager");
    manager.seed(7);
    manager
        .set_available_figures(vec![figure])
        .expect("catalog");
    manager
}
