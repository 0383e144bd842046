#![warn(clippy::all, clippy::pedantic)]

use crate::error::PhysicsResult;
use crate::figure::{Figure, FigureBuilder, RotationKey};
use crate::grid::Cell;

type Shape = &'static [&'static [Cell]];

// Rotation states in `RotationKey::ALL` order
const DASH: [Shape; 4] = [
    &[&[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]],
    &[&[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0]],
    &[&[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]],
    &[&[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0], &[1, 0, 0, 0]],
];

const L: [Shape; 4] = [
    &[&[1, 1, 1], &[1, 0, 0], &[0, 0, 0]],
    &[&[1, 0, 0], &[1, 0, 0], &[1, 1, 0]],
    &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
    &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]],
];

const SQUARE: [Shape; 4] = [
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[1, 1], &[1, 1]],
];

const Z: [Shape; 4] = [
    &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[1, 1, 0], &[1, 0, 0]],
    &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[1, 1, 0], &[1, 0, 0]],
];

const S: [Shape; 4] = [
    &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
    &[&[1, 0, 0], &[1, 1, 0], &[0, 1, 0]],
    &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
    &[&[1, 0, 0], &[1, 1, 0], &[0, 1, 0]],
];

const BACK_L: [Shape; 4] = [
    &[&[1, 1, 1], &[0, 0, 1], &[0, 0, 0]],
    &[&[1, 1, 0], &[1, 0, 0], &[1, 0, 0]],
    &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]],
];

const T: [Shape; 4] = [
    &[&[1, 1, 1], &[0, 1, 0], &[0, 0, 0]],
    &[&[1, 0, 0], &[1, 1, 0], &[1, 0, 0]],
    &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]],
];

fn build(builder: &mut FigureBuilder, shapes: &[Shape; 4]) -> PhysicsResult<Figure> {
    let height = shapes[0].len();
    let width = shapes[0].first().map_or(0, |row| row.len());
    builder.reset(width, height)?;
    for (key, shape) in RotationKey::ALL.into_iter().zip(shapes) {
        let rows = shape.iter().map(|row| row.to_vec()).collect();
        builder.set_state(key, rows)?;
    }
    builder.get_result()
}

/// The classic seven figures: dash, L, square, Z, S, back-L and T.
pub fn classic_figures() -> PhysicsResult<Vec<Figure>> {
    let mut builder = FigureBuilder::new();
    [DASH, L, SQUARE, Z, S, BACK_L, T]
        .iter()
        .map(|shapes| build(&mut builder, shapes))
        .collect()
}
