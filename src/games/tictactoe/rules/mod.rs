//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; the engine calls [`evaluate`] after
//! every accepted move.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board: a completed line wins, a full board draws.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(winner) => Outcome::Won(winner),
        None if is_draw(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
