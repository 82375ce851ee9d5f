//! Application state and logic.

use super::input::{self, Action};
use super::ui;
use crate::device::InputProfile;
use crate::games::grid::NumberGrid;
use crate::games::tictactoe::{Game, Outcome, Player};
use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, instrument};

/// What is being played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Tic-tac-toe.
    TicTacToe(Game),
    /// Number grid.
    Grid(NumberGrid),
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    screen: Screen,
    profile: InputProfile,
    should_quit: bool,
}

impl App {
    /// Tic-tac-toe with `first` moving first.
    pub fn tictactoe(first: Player, profile: InputProfile) -> Self {
        Self {
            screen: Screen::TicTacToe(Game::starting_with(first)),
            profile,
            should_quit: false,
        }
    }

    /// An empty number grid.
    pub fn grid(profile: InputProfile) -> Self {
        Self {
            screen: Screen::Grid(NumberGrid::new()),
            profile,
            should_quit: false,
        }
    }

    /// The current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The input profile used for instructions.
    pub fn profile(&self) -> InputProfile {
        self.profile
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = match self.screen {
            Screen::TicTacToe(_) => input::tictactoe_action(&key),
            Screen::Grid(_) => input::grid_action(&key),
        };
        match action {
            Some(action) => self.apply(action),
            None => debug!("Unbound key"),
        }
    }

    /// Handles a mouse event; a left click taps the cell under it.
    ///
    /// `board_area` is where the board was last drawn.
    #[instrument(skip(self, event))]
    pub fn handle_mouse(&mut self, event: MouseEvent, board_area: Rect) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (x, y) = (event.column, event.row);
        match &mut self.screen {
            Screen::TicTacToe(game) => {
                if let Some(index) = ui::hit(&ui::tictactoe_cells(board_area), x, y) {
                    game.apply_move(index);
                }
            }
            Screen::Grid(grid) => {
                if let Some(index) = ui::hit(&ui::grid_cells(board_area), x, y) {
                    grid.tap(index / 9, index % 9);
                }
            }
        }
    }

    /// Applies an action to the current screen.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match (&mut self.screen, action) {
            (_, Action::Quit) => self.should_quit = true,
            (Screen::TicTacToe(game), Action::Place(index)) => game.apply_move(index),
            (Screen::TicTacToe(game), Action::Reset) => game.reset(),
            (Screen::Grid(grid), Action::Move(direction)) => grid.move_selection(direction),
            (Screen::Grid(grid), Action::Tap) => {
                let cell = grid.selected().map_or((4, 4), |c| (c.row, c.col));
                grid.tap(cell.0, cell.1);
            }
            (Screen::Grid(grid), Action::Set(value)) => grid.set_selected(value),
            (Screen::Grid(grid), Action::Reset) => grid.clear(),
            (_, action) => debug!(?action, "Action does not apply to this screen"),
        }
    }

    /// Title shown above the board.
    pub fn title(&self) -> &'static str {
        match self.screen {
            Screen::TicTacToe(_) => "Tic Tac Toe Fun!",
            Screen::Grid(_) => "Number Grid",
        }
    }

    /// Instructions for the current screen and profile.
    pub fn instructions(&self) -> &'static str {
        match self.screen {
            Screen::TicTacToe(_) => self.profile.tictactoe_instructions(),
            Screen::Grid(_) => self.profile.grid_instructions(),
        }
    }

    /// Status line: whose turn, the result, or the grid selection.
    pub fn status_line(&self) -> String {
        match &self.screen {
            Screen::TicTacToe(game) => match game.outcome() {
                Outcome::InProgress => format!("Next player: {}", game.state().to_move()),
                Outcome::Won(player) => format!("{} Wins! Press 'r' to play again.", player),
                Outcome::Draw => "It's a Draw! Press 'r' to play again.".to_string(),
            },
            Screen::Grid(grid) => {
                if grid.is_solved() {
                    return "Solved!".to_string();
                }
                let conflicts = grid.conflicts().len();
                let selection = match grid.selected() {
                    Some(cell) => format!("Selected {} = {}", cell, grid.value(cell)),
                    None => "No square selected".to_string(),
                };
                if conflicts > 0 {
                    format!("{} | {} squares clash", selection, conflicts)
                } else {
                    selection
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::grid::Cell;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    fn game(app: &App) -> &Game {
        match app.screen() {
            Screen::TicTacToe(game) => game,
            Screen::Grid(_) => panic!("expected tic-tac-toe"),
        }
    }

    fn grid(app: &App) -> &NumberGrid {
        match app.screen() {
            Screen::Grid(grid) => grid,
            Screen::TicTacToe(_) => panic!("expected grid"),
        }
    }

    #[test]
    fn test_numpad_game_to_win() {
        let mut app = App::tictactoe(Player::X, InputProfile::Keyboard);
        // 7 4 8 5 9: X takes the top row.
        for c in ['7', '4', '8', '5', '9'] {
            press(&mut app, c);
        }
        assert_eq!(game(&app).outcome(), Outcome::Won(Player::X));
        assert_eq!(app.status_line(), "X Wins! Press 'r' to play again.");

        press(&mut app, 'r');
        assert_eq!(game(&app).outcome(), Outcome::InProgress);
        assert_eq!(app.status_line(), "Next player: X");
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::tictactoe(Player::X, InputProfile::Keyboard);
        app.handle_key(KeyEvent::new_with_kind(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(game(&app).state().board().occupied(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::grid(InputProfile::Touch);
        assert!(!app.should_quit());
        press(&mut app, 'q');
        assert!(app.should_quit());
    }

    #[test]
    fn test_grid_keys() {
        let mut app = App::grid(InputProfile::Keyboard);
        app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(grid(&app).selected(), Cell::new(3, 4));

        press(&mut app, '6');
        assert_eq!(app.status_line(), "Selected r4c5 = 6");

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(grid(&app).value(Cell::new(3, 4).unwrap()), 7);

        press(&mut app, 'c');
        assert_eq!(grid(&app), &NumberGrid::new());
    }

    #[test]
    fn test_mouse_click_places_mark() {
        let mut app = App::tictactoe(Player::O, InputProfile::Touch);
        let area = Rect::new(0, 0, 60, 20);
        let center = ui::tictactoe_cells(area)[4];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: center.x + 1,
            row: center.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, area);
        assert_eq!(game(&app).state().board().occupied(), 1);
        assert_eq!(app.status_line(), "Next player: X");
    }

    #[test]
    fn test_mouse_taps_cycle_grid_cell() {
        let mut app = App::grid(InputProfile::Touch);
        let area = Rect::new(0, 0, 60, 20);
        let target = ui::grid_cells(area)[10];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x,
            row: target.y,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, area);
        app.handle_mouse(click, area);
        app.handle_mouse(click, area);
        let cell = Cell::new(1, 1).unwrap();
        assert_eq!(grid(&app).selected(), Some(cell));
        assert_eq!(grid(&app).value(cell), 2);
    }
}
