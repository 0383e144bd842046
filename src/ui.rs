#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting field dimensions to u16 since fields are always small
    clippy::cast_possible_truncation
)]

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::grid::{EMPTY, Grid};
use crate::scoring::ScoreBoard;

// Each cell is 2 characters wide and 1 tall
const CELL_WIDTH: u16 = 2;
const MIN_INFO_WIDTH: u16 = 20;

/// Everything the presentation needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub field: &'a Grid,
    pub score: &'a ScoreBoard,
    pub game_is_alive: bool,
}

/// Outer size in terminal cells of the bordered board for `field`.
#[must_use]
pub fn board_size(field: &Grid) -> (u16, u16) {
    (
        field.width() as u16 * CELL_WIDTH + 2,
        field.height() as u16 + 2,
    )
}

pub fn render(f: &mut Frame, view: &View<'_>) {
    let (board_width, board_height) = board_size(view.field);

    if f.area().width < board_width + MIN_INFO_WIDTH || f.area().height < board_height {
        let warning_text = Paragraph::new("Terminal too small!\nPlease resize your terminal.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("blockfield"));
        f.render_widget(warning_text, centered_rect(60, 40, f.area()));
        return;
    }

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(board_width),
            Constraint::Min(MIN_INFO_WIDTH),
        ])
        .split(f.area());

    let board_area = Rect {
        height: board_height,
        ..main_layout[0]
    };
    render_field(f, view, board_area);

    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Score
            Constraint::Min(5),    // Controls
        ])
        .split(main_layout[1]);

    let stats = format!(
        "Score: {}\nLines: {}",
        view.score.score, view.score.lines_cleared
    );
    let stats = Paragraph::new(stats)
        .block(Block::default().borders(Borders::ALL).title("Info"))
        .wrap(Wrap { trim: true });
    f.render_widget(stats, info_layout[0]);

    let controls = Paragraph::new(
        "A/←  D/→: Move\n\
        S/↓: Drop\n\
        W/↑: Rotate\n\
        X/Z: Pause/Resume\n\
        Q: Quit",
    )
    .block(Block::default().borders(Borders::TOP).title("Controls"))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, info_layout[1]);
}

fn render_field(f: &mut Frame, view: &View<'_>, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    for (y, row) in view.field.rows().iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            let symbol = if cell == EMPTY { " ." } else { "[]" };
            let cell_x = inner_area.left() + x as u16 * CELL_WIDTH;
            let cell_y = inner_area.top() + y as u16;
            if cell_x + CELL_WIDTH > inner_area.right() || cell_y >= inner_area.bottom() {
                continue;
            }
            f.buffer_mut()
                .set_string(cell_x, cell_y, symbol, Style::default().fg(Color::Cyan));
        }
    }

    if !view.game_is_alive {
        let game_over = Paragraph::new("GAME OVER")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        let game_over_area = Rect {
            y: inner_area.y + inner_area.height / 2,
            height: 1,
            ..inner_area
        };
        f.render_widget(game_over, game_over_area);
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
