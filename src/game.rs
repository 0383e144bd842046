#![warn(clippy::all, clippy::pedantic)]

// Field dimensions
pub const FIELD_WIDTH: usize = 10;
pub const FIELD_HEIGHT: usize = 20;

// Timing
pub const PHYSICS_FRAME_RATE: u32 = 60; // Simulation frames per second
pub const GRAPHICS_FRAME_RATE: u32 = 30; // Presentation refreshes per second
pub const DEFAULT_SPEED: u32 = 2; // Falling speed in lines per second

// Scoring: a run of n rows cleared together is worth n * n * this
pub const POINTS_PER_SQUARED_RUN: u64 = 50;
