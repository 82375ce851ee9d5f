//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::GameState;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// No player appears twice in a row in the history, and the player to move
/// is the opponent of whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        match history.last() {
            Some(last) => state.to_move() == last.player.opponent(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
