//! Outcome invariant: the recorded outcome is what the rules say.

use super::super::{Board, GameState, Outcome, Square, rules};
use super::Invariant;

/// Invariant: the outcome matches the board, and no move followed the end.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        if state.outcome() != rules::evaluate(state.board()) {
            return false;
        }

        // Every position before the last move must still have been live.
        let mut board = Board::new();
        let history = state.history();
        for mov in history.iter().take(history.len().saturating_sub(1)) {
            board.set(mov.position, Square::Occupied(mov.player));
            if rules::evaluate(&board) != Outcome::InProgress {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Outcome matches the board and the game ended on the last move"
    }
}
