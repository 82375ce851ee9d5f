//! Key bindings.

use crate::games::grid::Direction;
use crate::games::tictactoe::keymap;
use crossterm::event::{KeyCode, KeyEvent, KeyEventState};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at a board index.
    Place(usize),
    /// Move the grid cursor.
    Move(Direction),
    /// Tap the grid cell under the cursor.
    Tap,
    /// Write a value into the selected grid cell.
    Set(u8),
    /// Start over.
    Reset,
    /// Leave the app.
    Quit,
}

/// Key identifier in the `"7"` / `"Numpad7"` form.
///
/// Keypad digits are only told apart when the terminal reports keypad
/// state; otherwise they arrive as plain digits, which map the same way.
pub fn key_name(key: &KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(c) if key.state.contains(KeyEventState::KEYPAD) => Some(format!("Numpad{c}")),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

fn common_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        _ => None,
    }
}

/// Bindings while playing tic-tac-toe.
pub fn tictactoe_action(key: &KeyEvent) -> Option<Action> {
    common_action(key).or_else(|| {
        key_name(key)
            .and_then(|name| keymap::index_for_key(&name))
            .map(Action::Place)
    })
}

/// Bindings while filling the number grid.
pub fn grid_action(key: &KeyEvent) -> Option<Action> {
    common_action(key).or(match key.code {
        KeyCode::Char('c') => Some(Action::Reset),
        KeyCode::Up => Some(Action::Move(Direction::Up)),
        KeyCode::Down => Some(Action::Move(Direction::Down)),
        KeyCode::Left => Some(Action::Move(Direction::Left)),
        KeyCode::Right => Some(Action::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Tap),
        KeyCode::Char(c) => c.to_digit(10).map(|d| Action::Set(d as u8)),
        _ => None,
    })
}
