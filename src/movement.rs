#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow wrapping casts from usize to i32 since spawn columns are bounded by the field width
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation
)]

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info, trace, warn};

use crate::FramePacer;
use crate::config::GameConfig;
use crate::error::{PhysicsError, PhysicsResult};
use crate::events::{Action, ActionEventMapper, Event, EventRegister, MoveDirection};
use crate::field::Field;
use crate::figure::{Figure, RotationKey};
use crate::grid::Grid;
use crate::interactor::{PhysicalInteractor, Position};
use crate::scoring::{ClearEvent, ScoreRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Running,
    GameOver,
}

// Outcome of a move attempt as seen by the tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motion {
    Falling,
    Landed,
}

/// Cloneable view of a running game for the input and presentation threads.
#[derive(Debug, Clone)]
pub struct GameHandle {
    events: EventRegister,
    scored: ScoreRecord,
    snapshot: Arc<Mutex<Grid>>,
    alive: Arc<AtomicBool>,
}

impl GameHandle {
    pub fn push_event(&self, event: Event) {
        self.events.push(event);
    }

    #[must_use]
    pub fn pop_scored_lines(&self) -> Vec<ClearEvent> {
        self.scored.drain()
    }

    /// Field overlaid with the active figure as of the last finished frame.
    #[must_use]
    pub fn rendered_field(&self) -> Grid {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn game_is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn stop_game(&self) {
        if self.alive.swap(false, Ordering::AcqRel) {
            info!("Game stopped");
        }
    }
}

/// Tick-driven control loop over one [`PhysicalInteractor`].
///
/// Each frame pops at most one pending event, resolves it through the
/// [`ActionEventMapper`], applies gravity on a cadence of
/// `frame_rate / falling_speed` frames and, when the active figure can no
/// longer fall, locks it, clears full rows and spawns the next figure.
#[derive(Debug)]
pub struct MovementManager {
    interactor: PhysicalInteractor,
    available_figures: Vec<Figure>,
    mapper: ActionEventMapper,
    event_register: EventRegister,
    scored: ScoreRecord,
    snapshot: Arc<Mutex<Grid>>,
    game_is_alive: Arc<AtomicBool>,
    phase: GamePhase,
    paused: bool,
    falling_speed_in_lines_per_sec: u32,
    physics_frame_rate: u32,
    frames_per_falling_move_counter: u32,
    pacer: FramePacer,
    rng: fastrand::Rng,
}

impl MovementManager {
    pub fn new(field: Field, falling_speed: u32, physics_frame_rate: u32) -> PhysicsResult<Self> {
        if falling_speed == 0 {
            return Err(PhysicsError::InvalidRate {
                name: "falling speed",
                value: falling_speed,
            });
        }
        if physics_frame_rate == 0 {
            return Err(PhysicsError::InvalidRate {
                name: "physics frame rate",
                value: physics_frame_rate,
            });
        }

        let scored = ScoreRecord::new();
        let snapshot = Arc::new(Mutex::new(field.grid().clone()));
        Ok(Self {
            interactor: PhysicalInteractor::with_record(field, scored.clone()),
            available_figures: Vec::new(),
            mapper: ActionEventMapper::new(),
            event_register: EventRegister::new(),
            scored,
            snapshot,
            game_is_alive: Arc::new(AtomicBool::new(true)),
            phase: GamePhase::NotStarted,
            paused: false,
            falling_speed_in_lines_per_sec: falling_speed,
            physics_frame_rate,
            frames_per_falling_move_counter: 0,
            pacer: FramePacer::new(physics_frame_rate),
            rng: fastrand::Rng::new(),
        })
    }

    pub fn from_config(config: &GameConfig) -> PhysicsResult<Self> {
        config.validate()?;
        let field = Field::new(config.field.width, config.field.height)?;
        Self::new(field, config.physics.falling_speed, config.physics.frame_rate)
    }

    /// Reseeds the spawn randomness, for reproducible games.
    pub fn seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    #[must_use]
    pub fn handle(&self) -> GameHandle {
        GameHandle {
            events: self.event_register.clone(),
            scored: self.scored.clone(),
            snapshot: Arc::clone(&self.snapshot),
            alive: Arc::clone(&self.game_is_alive),
        }
    }

    /// Replaces the catalog spawns are drawn from. Every figure must be built.
    pub fn set_available_figures(&mut self, figures: Vec<Figure>) -> PhysicsResult<()> {
        if figures.is_empty() {
            return Err(PhysicsError::EmptyCatalog);
        }
        if let Some(idx) = figures.iter().position(|figure| !figure.is_ready()) {
            warn!("Figure {idx} of the catalog was never reset");
            return Err(PhysicsError::NotReady("catalog figure states"));
        }
        for (idx, figure) in figures.iter().enumerate() {
            for key in RotationKey::ALL {
                if figure.get_state(key)?.is_clear() {
                    warn!("Figure {idx} of the catalog has a blank {key:?} state");
                    return Err(PhysicsError::Shape(format!(
                        "catalog figure {idx} has no opaque cell in its {key:?} state"
                    )));
                }
            }
        }
        debug!("Catalog holds {} figures", figures.len());
        self.available_figures = figures;
        Ok(())
    }

    /// Frames between two gravity steps.
    #[must_use]
    pub fn falling_cadence(&self) -> u32 {
        (self.physics_frame_rate / self.falling_speed_in_lines_per_sec).max(1)
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn game_is_alive(&self) -> bool {
        self.game_is_alive.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn interactor(&self) -> &PhysicalInteractor {
        &self.interactor
    }

    #[must_use]
    pub fn get_current_field_state(&self) -> &Field {
        self.interactor.get_current_field_state()
    }

    #[must_use]
    pub fn rendered_field(&self) -> Grid {
        self.interactor.rendered_field()
    }

    /// Overwrites the pending event; an unconsumed earlier event is lost.
    pub fn push_event(&self, event: Event) {
        self.event_register.push(event);
    }

    /// Drains the lines-scored record.
    #[must_use]
    pub fn pop_scored_lines(&self) -> Vec<ClearEvent> {
        self.scored.drain()
    }

    /// Spawns the first figure and starts the simulation.
    pub fn start_game(&mut self) -> PhysicsResult<()> {
        if self.phase != GamePhase::NotStarted {
            warn!("Game already started, phase is {:?}", self.phase);
            return Ok(());
        }
        if self.available_figures.is_empty() {
            return Err(PhysicsError::EmptyCatalog);
        }

        info!("Starting game");
        self.phase = GamePhase::Running;
        self.spawn_figure()?;
        self.publish_snapshot();
        Ok(())
    }

    /// Waits for the next physics frame boundary, then runs one frame.
    pub fn tick_game(&mut self) -> PhysicsResult<()> {
        self.pacer.wait_for_next_frame();
        self.step()
    }

    /// One simulation frame without pacing.
    pub fn step(&mut self) -> PhysicsResult<()> {
        if self.phase != GamePhase::Running || !self.game_is_alive() {
            return Ok(());
        }

        if !self.paused {
            self.frames_per_falling_move_counter += 1;
        }

        let event = self.event_register.pop();
        let action = self.mapper.get_action_by_event(event);
        if event != Event::NoPendingEvent {
            trace!("Event {event:?} resolved to {action:?}");
        }

        let mut motion = self.apply(action)?;
        if motion == Motion::Falling
            && !self.paused
            && self.frames_per_falling_move_counter >= self.falling_cadence()
        {
            self.frames_per_falling_move_counter = 0;
            motion = self.move_down()?;
        }

        if motion == Motion::Landed {
            self.lock_figure()?;
        }

        self.publish_snapshot();
        Ok(())
    }

    /// Ends the driving loop.
    pub fn stop_game(&mut self) {
        if self.game_is_alive.swap(false, Ordering::AcqRel) {
            info!("Game stopped");
        }
    }

    fn apply(&mut self, action: Action) -> PhysicsResult<Motion> {
        match action {
            Action::Nothing => Ok(Motion::Falling),
            Action::Pause => {
                if !self.paused {
                    info!("Game paused");
                    self.paused = true;
                }
                Ok(Motion::Falling)
            }
            Action::Unpause => {
                if self.paused {
                    info!("Game resumed");
                    self.paused = false;
                }
                Ok(Motion::Falling)
            }
            _ if self.paused => Ok(Motion::Falling),
            Action::Move(MoveDirection::Down) => self.move_down(),
            Action::Move(direction) => {
                self.move_sideways(direction)?;
                Ok(Motion::Falling)
            }
            Action::Accelerate => self.accelerate(),
            Action::Rotate => {
                self.rotate_figure()?;
                Ok(Motion::Falling)
            }
        }
    }

    // A blocked downward move means the figure has to be locked.
    fn move_down(&mut self) -> PhysicsResult<Motion> {
        let target = self.interactor.get_current_figure_pos()?.offset(0, 1);
        match self.interactor.move_figure(target) {
            Ok(()) => Ok(Motion::Falling),
            Err(err) if err.is_collision() => {
                trace!("Figure landed: {err}");
                Ok(Motion::Landed)
            }
            Err(err) => Err(err),
        }
    }

    // Blocked sideways moves have no effect.
    fn move_sideways(&mut self, direction: MoveDirection) -> PhysicsResult<()> {
        let (dx, dy) = direction.delta();
        let target = self.interactor.get_current_figure_pos()?.offset(dx, dy);
        match self.interactor.move_figure(target) {
            Err(err) if err.is_collision() => {
                trace!("Move {direction:?} blocked: {err}");
                Ok(())
            }
            other => other,
        }
    }

    // A figure with an opaque cell reaches the floor within the field height.
    fn accelerate(&mut self) -> PhysicsResult<Motion> {
        let limit = self.interactor.get_current_field_state().height()
            + self.interactor.get_current_figure()?.height()?;
        for _ in 0..=limit {
            if self.move_down()? == Motion::Landed {
                return Ok(Motion::Landed);
            }
        }
        warn!("Figure never landed after {limit} moves, locking in place");
        Ok(Motion::Landed)
    }

    // Advances to the next rotation key, reverting if it does not fit.
    fn rotate_figure(&mut self) -> PhysicsResult<()> {
        let current = self.interactor.get_current_figure()?.get_current_key()?;
        match self.interactor.change_figure_state(current.next()) {
            Err(err) if err.is_collision() => {
                trace!("Rotation to {:?} blocked: {err}", current.next());
                self.interactor.change_figure_state(current)
            }
            other => other,
        }
    }

    fn lock_figure(&mut self) -> PhysicsResult<()> {
        self.interactor.update_field_state()?;
        let runs = self.interactor.count_and_clear_lines()?;
        if !runs.is_empty() {
            info!("Cleared lines {runs:?}");
        }
        self.spawn_figure()
    }

    // Copy of a random catalog figure, so the catalog itself is never mutated.
    fn random_figure(&mut self) -> PhysicsResult<Figure> {
        if self.available_figures.is_empty() {
            return Err(PhysicsError::EmptyCatalog);
        }
        let idx = self.rng.usize(..self.available_figures.len());
        Ok(self.available_figures[idx].clone())
    }

    // Random column on the top row where the figure's bounding box fits.
    fn random_position(&mut self, figure: &Figure) -> PhysicsResult<Position> {
        let field_width = self.interactor.get_current_field_state().width();
        let figure_width = figure.width()?;
        let x = match field_width.checked_sub(figure_width) {
            Some(max_x) => self.rng.usize(0..=max_x),
            None => 0,
        };
        Ok(Position::new(x as i32, 0))
    }

    // Places a new figure on the top row; a blocked spawn ends the game.
    fn spawn_figure(&mut self) -> PhysicsResult<()> {
        let figure = self.random_figure()?;
        let position = self.random_position(&figure)?;
        match self.interactor.place_figure(figure, position) {
            Ok(()) => {
                debug!("Spawned figure at ({}, {})", position.x, position.y);
                Ok(())
            }
            Err(err) if err.is_collision() => {
                info!("Game over: {err}");
                self.phase = GamePhase::GameOver;
                self.game_is_alive.store(false, Ordering::Release);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn publish_snapshot(&self) {
        let rendered = self.interactor.rendered_field();
        *self.snapshot.lock().unwrap_or_else(PoisonError::into_inner) = rendered;
    }
}

impl fmt::Display for MovementManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rendered_field())
    }
}
