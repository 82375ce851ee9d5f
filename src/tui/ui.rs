//! Stateless UI rendering.
//!
//! Cell rectangles come from [`tictactoe_cells`] and [`grid_cells`], which
//! mouse handling also uses, so a click lands on the cell that was drawn
//! under it.

use super::app::{App, Screen};
use crate::device::InputProfile;
use crate::games::grid::{self, Cell, NumberGrid};
use crate::games::tictactoe::{Game, Player, Position, Square, rules};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as Point, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GRID_CELL_WIDTH: u16 = 3;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// Title line.
    pub title: Rect,
    /// How-to-play line.
    pub instructions: Rect,
    /// The board.
    pub board: Rect,
    /// Status box.
    pub status: Rect,
    /// Key hints.
    pub help: Rect,
}

/// Splits the frame into regions.
pub fn areas(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(2),  // Instructions
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Help
        ])
        .split(area);

    Areas {
        title: chunks[0],
        instructions: chunks[1],
        board: chunks[2],
        status: chunks[3],
        help: chunks[4],
    }
}

/// The 9 tic-tac-toe cells, index order, centered in `area`.
pub fn tictactoe_cells(area: Rect) -> [Rect; 9] {
    let origin = centered_origin(area, 3 * CELL_WIDTH, 3 * CELL_HEIGHT);
    std::array::from_fn(|i| {
        let (row, col) = ((i / 3) as u16, (i % 3) as u16);
        Rect::new(
            origin.x + col * CELL_WIDTH,
            origin.y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area)
    })
}

/// The 81 grid cells, row-major, centered in `area`.
///
/// Boxes are separated by one blank column and one blank row.
pub fn grid_cells(area: Rect) -> [Rect; 81] {
    let size = grid::SIZE as u16;
    let gaps = (grid::SIZE / grid::BOX - 1) as u16;
    let origin = centered_origin(area, size * GRID_CELL_WIDTH + gaps, size + gaps);
    std::array::from_fn(|i| {
        let (row, col) = ((i / grid::SIZE) as u16, (i % grid::SIZE) as u16);
        let box_size = grid::BOX as u16;
        Rect::new(
            origin.x + col * GRID_CELL_WIDTH + col / box_size,
            origin.y + row + row / box_size,
            GRID_CELL_WIDTH,
            1,
        )
        .intersection(area)
    })
}

/// Index of the cell containing `(x, y)`.
pub fn hit(cells: &[Rect], x: u16, y: u16) -> Option<usize> {
    cells.iter().position(|cell| cell.contains(Point::new(x, y)))
}

/// Renders the whole app.
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = areas(frame.area());

    let title = Paragraph::new(app.title())
        .style(Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, areas.title);

    let instructions = Paragraph::new(app.instructions())
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(instructions, areas.instructions);

    match app.screen() {
        Screen::TicTacToe(game) => draw_tictactoe(frame, areas.board, game, app.profile()),
        Screen::Grid(grid) => draw_grid(frame, areas.board, grid),
    }

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, areas.status);

    let help = match app.screen() {
        Screen::TicTacToe(_) => "r: new game   q: quit",
        Screen::Grid(_) => "arrows: move   enter: cycle   0-9: set   c: clear   q: quit",
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, areas.help);
}

fn draw_tictactoe(frame: &mut Frame, area: Rect, game: &Game, profile: InputProfile) {
    let board = game.state().board();
    let winning = rules::winning_line(board);

    for (pos, cell_area) in Position::iter().zip(tictactoe_cells(area)) {
        let (text, style) = match board.get(pos) {
            Square::Empty => {
                let hint = match profile {
                    InputProfile::Keyboard => pos.numpad_key().to_string(),
                    InputProfile::Touch => String::new(),
                };
                (hint, Style::default().fg(Color::DarkGray))
            }
            Square::Occupied(player) => (
                player.to_string(),
                Style::default()
                    .fg(player_color(player))
                    .add_modifier(Modifier::BOLD),
            ),
        };

        let style = if winning.is_some_and(|line| line.contains(&pos)) {
            style.bg(Color::Yellow)
        } else {
            style
        };

        let cell = Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            );
        frame.render_widget(cell, cell_area);
    }
}

fn draw_grid(frame: &mut Frame, area: Rect, grid: &NumberGrid) {
    let conflicts = grid.conflicts();

    for (i, cell_area) in grid_cells(area).into_iter().enumerate() {
        let cell = Cell {
            row: i / grid::SIZE,
            col: i % grid::SIZE,
        };
        let text = match grid.value(cell) {
            0 => "·".to_string(),
            value => value.to_string(),
        };

        let mut style = if cell.box_index() % 2 == 0 {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Cyan)
        };
        if conflicts.contains(&cell) {
            style = style.fg(Color::Red).add_modifier(Modifier::BOLD);
        }
        if grid.selected() == Some(cell) {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
        frame.render_widget(paragraph, cell_area);
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::LightRed,
        Player::O => Color::Magenta,
    }
}

fn centered_origin(area: Rect, width: u16, height: u16) -> Point {
    Point::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
    )
}
