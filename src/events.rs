#![warn(clippy::all, clippy::pedantic)]

use std::sync::{Arc, Mutex, PoisonError};

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use log::trace;

/// Domain events produced by the input side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Event {
    #[default]
    NoPendingEvent,
    MoveLeft,
    MoveRight,
    SpeedUp,
    RotateFigure,
    PauseGame,
    UnpauseGame,
}

impl Event {
    pub const ALL: [Event; 7] = [
        Event::NoPendingEvent,
        Event::MoveLeft,
        Event::MoveRight,
        Event::SpeedUp,
        Event::RotateFigure,
        Event::PauseGame,
        Event::UnpauseGame,
    ];

    /// The "nothing to do" sentinel left in the register after a pop.
    #[must_use]
    pub fn neutral() -> Self {
        Event::NoPendingEvent
    }

    fn index(self) -> usize {
        match self {
            Event::NoPendingEvent => 0,
            Event::MoveLeft => 1,
            Event::MoveRight => 2,
            Event::SpeedUp => 3,
            Event::RotateFigure => 4,
            Event::PauseGame => 5,
            Event::UnpauseGame => 6,
        }
    }
}

/// Direction of a translation. Kept apart from `RotationKey`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
    Down,
}

impl MoveDirection {
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
            MoveDirection::Down => (0, 1),
        }
    }
}

/// What the movement manager does in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Nothing,
    Move(MoveDirection),
    Accelerate,
    Rotate,
    Pause,
    Unpause,
}

/// Fixed event -> action table, built once per manager.
#[derive(Debug, Clone)]
pub struct ActionEventMapper {
    table: [Action; Event::ALL.len()],
}

impl Default for ActionEventMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionEventMapper {
    #[must_use]
    pub fn new() -> Self {
        let mut table = [Action::Nothing; Event::ALL.len()];
        for event in Event::ALL {
            table[event.index()] = match event {
                Event::NoPendingEvent => Action::Nothing,
                Event::MoveLeft => Action::Move(MoveDirection::Left),
                Event::MoveRight => Action::Move(MoveDirection::Right),
                Event::SpeedUp => Action::Accelerate,
                Event::RotateFigure => Action::Rotate,
                Event::PauseGame => Action::Pause,
                Event::UnpauseGame => Action::Unpause,
            };
        }
        Self { table }
    }

    #[must_use]
    pub fn get_action_by_event(&self, event: Event) -> Action {
        self.table[event.index()]
    }
}

/// Single-slot, last-write-wins event register.
///
/// A one-capacity channel guarded by a mutex: `push` replaces whatever is
/// pending and never blocks, `pop` takes the pending event or the neutral one.
/// Clones share the same slot.
#[derive(Debug, Clone)]
pub struct EventRegister {
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    guard: Arc<Mutex<()>>,
}

impl Default for EventRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRegister {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = bounded(1);
        Self {
            sender,
            receiver,
            guard: Arc::new(Mutex::new(())),
        }
    }

    pub fn push(&self, event: Event) {
        let _guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        if let Ok(dropped) = self.receiver.try_recv() {
            trace!("Event {dropped:?} overwritten by {event:?}");
        }
        match self.sender.try_send(event) {
            Ok(()) => {}
            // Both ends live in `self`, and the slot was just emptied under the guard.
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => {
                trace!("Event {event:?} dropped");
            }
        }
    }

    #[must_use]
    pub fn pop(&self) -> Event {
        let _guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        self.receiver.try_recv().unwrap_or_else(|_| Event::neutral())
    }

    /// True while an event waits in the slot.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.receiver.is_empty()
    }
}
