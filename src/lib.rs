pub mod config;
pub mod error;
pub mod events;
pub mod field;
pub mod figure;
pub mod game;
pub mod grid;
pub mod interactor;
pub mod keyboard;
pub mod movement;
pub mod presets;
pub mod scoring;
pub mod ui;

#[cfg(test)]
mod tests;

use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate frame pacing for the physics loop.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    next_frame: Instant,
}

impl FramePacer {
    /// Pacer for `frames_per_second`; zero is treated as one.
    #[must_use]
    pub fn new(frames_per_second: u32) -> Self {
        let period = Duration::from_secs(1) / frames_per_second.max(1);
        Self {
            period,
            next_frame: Instant::now() + period,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Sleeps until the next frame boundary and schedules the one after it.
    /// A caller that fell behind by more than a frame is resynchronised
    /// instead of being allowed to burst.
    pub fn wait_for_next_frame(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next_frame.checked_duration_since(now) {
            thread::sleep(remaining);
            self.next_frame += self.period;
        } else {
            self.next_frame = now + self.period;
        }
    }
}
