#![warn(clippy::all, clippy::pedantic)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::events::Event;

/// What a key press means to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Game(Event),
    Quit,
    Ignored,
}

/// Maps raw key presses onto domain events.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEventMapper;

impl KeyEventMapper {
    #[must_use]
    pub fn get_event_by_key_or_neutral(self, code: KeyCode) -> Event {
        match code {
            KeyCode::Left | KeyCode::Char('a') => Event::MoveLeft,
            KeyCode::Right | KeyCode::Char('d') => Event::MoveRight,
            KeyCode::Down | KeyCode::Char('s') => Event::SpeedUp,
            KeyCode::Up | KeyCode::Char('w' | ' ') => Event::RotateFigure,
            KeyCode::Char('x') => Event::PauseGame,
            KeyCode::Char('z') => Event::UnpauseGame,
            _ => Event::neutral(),
        }
    }

    #[must_use]
    pub fn command_for(self, key: &KeyEvent) -> KeyCommand {
        if key.kind == KeyEventKind::Release {
            return KeyCommand::Ignored;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyCommand::Quit,
            code => match self.get_event_by_key_or_neutral(code) {
                Event::NoPendingEvent => KeyCommand::Ignored,
                event => KeyCommand::Game(event),
            },
        }
    }
}
