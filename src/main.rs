#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use blockfield::config::{GameConfig, loader};
use blockfield::keyboard::{KeyCommand, KeyEventMapper};
use blockfield::movement::{GameHandle, MovementManager};
use blockfield::presets::classic_figures;
use blockfield::scoring::ScoreBoard;
use blockfield::ui::{self, View};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

// Poll timeout for the input thread, so it notices the game ending
const INPUT_POLL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Create log file and redirect stderr to it
    let log_path = "blockfield.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .context("Failed to create log file")?;

    // Safety: both descriptors are open for the duration of the call
    unsafe {
        libc::dup2(log_file.as_raw_fd(), io::stderr().as_raw_fd());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting blockfield");

    match loader::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config.install();
        }
        Err(e) => error!("Failed to load configuration, using defaults: {e}"),
    }
    let config = GameConfig::current();

    let mut manager = MovementManager::from_config(&config)?;
    manager.set_available_figures(classic_figures()?)?;
    let handle = manager.handle();

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let physics = thread::spawn(move || physics_loop(manager));
    let input_handle = handle.clone();
    let input = thread::spawn(move || input_loop(&input_handle));

    let mut score = ScoreBoard::default();
    let res = run_presentation(&mut terminal, &handle, &mut score, config.graphics.frame_rate);

    // Make sure the other threads exit even if presentation failed
    handle.stop_game();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match physics.join() {
        Ok(Ok(())) => debug!("Physics thread finished"),
        Ok(Err(e)) => error!("Physics error: {e}"),
        Err(_) => error!("Physics thread panicked"),
    }
    match input.join() {
        Ok(Ok(())) => debug!("Input thread finished"),
        Ok(Err(e)) => error!("Input error: {e}"),
        Err(_) => error!("Input thread panicked"),
    }

    if let Err(err) = res {
        error!("Presentation error: {err:?}");
        return Err(err);
    }

    score.absorb(&handle.pop_scored_lines());
    println!(
        "Game is over. Your score: {} ({} lines)",
        score.score, score.lines_cleared
    );
    Ok(())
}

fn physics_loop(mut manager: MovementManager) -> blockfield::error::PhysicsResult<()> {
    manager.start_game()?;
    while manager.game_is_alive() {
        if let Err(e) = manager.tick_game() {
            manager.stop_game();
            return Err(e);
        }
    }
    info!("Physics loop finished");
    Ok(())
}

fn input_loop(handle: &GameHandle) -> Result<()> {
    let mapper = KeyEventMapper;
    while handle.game_is_alive() {
        if !event::poll(INPUT_POLL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            debug!("Key event: {key:?}");
            match mapper.command_for(&key) {
                KeyCommand::Game(event) => handle.push_event(event),
                KeyCommand::Quit => handle.stop_game(),
                KeyCommand::Ignored => {}
            }
        }
    }
    Ok(())
}

fn run_presentation<B: Backend>(
    terminal: &mut Terminal<B>,
    handle: &GameHandle,
    score: &mut ScoreBoard,
    frame_rate: u32,
) -> Result<()> {
    let frame = Duration::from_secs(1) / frame_rate.max(1);
    loop {
        score.absorb(&handle.pop_scored_lines());
        let field = handle.rendered_field();
        let alive = handle.game_is_alive();
        let board = *score;
        terminal.draw(|f| {
            ui::render(
                f,
                &View {
                    field: &field,
                    score: &board,
                    game_is_alive: alive,
                },
            );
        })?;
        if !alive {
            // Leave the final board up for a moment
            thread::sleep(Duration::from_secs(1));
            return Ok(());
        }
        thread::sleep(frame);
    }
}
