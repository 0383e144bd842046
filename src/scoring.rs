#![warn(clippy::all, clippy::pedantic)]

use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::game::POINTS_PER_SQUARED_RUN;

/// Run lengths of full rows cleared together in one pass, e.g. `[1, 1]` for
/// two separated rows or `[2]` for two adjacent ones.
pub type ClearEvent = Vec<usize>;

/// Lines-scored record shared between the physics thread (appender) and the
/// presentation thread (drainer).
#[derive(Debug, Clone, Default)]
pub struct ScoreRecord {
    events: Arc<Mutex<Vec<ClearEvent>>>,
}

impl ScoreRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ClearEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append(&self, event: ClearEvent) {
        self.lock().push(event);
    }

    /// Returns everything recorded so far and leaves the record empty.
    #[must_use]
    pub fn drain(&self) -> Vec<ClearEvent> {
        mem::take(&mut *self.lock())
    }

    /// Copy of the current record without draining it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ClearEvent> {
        self.lock().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Points for one drained batch of clear events.
#[must_use]
pub fn points_for(events: &[ClearEvent]) -> u64 {
    events
        .iter()
        .flatten()
        .map(|&run| {
            let run = run as u64;
            POINTS_PER_SQUARED_RUN * run * run
        })
        .sum()
}

/// Running totals kept by the presentation side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u64,
    pub lines_cleared: u64,
}

impl ScoreBoard {
    pub fn absorb(&mut self, events: &[ClearEvent]) {
        if events.is_empty() {
            return;
        }
        let points = points_for(events);
        let lines: usize = events.iter().flatten().sum();
        self.score += points;
        self.lines_cleared += lines as u64;
        debug!("Scored {points} points for {lines} lines");
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
