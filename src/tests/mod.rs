#![warn(clippy::all, clippy::pedantic)]

// Test modules
pub mod config_loader_tests;
pub mod events_tests;
pub mod figure_tests;
pub mod test_utils;
pub mod time_tests;
