//! Non-interactive play: feed a list of indices through the engine.

use crate::games::tictactoe::{Game, Player};
use serde::Serialize;
use tracing::{info, instrument};

/// Plays `moves` in order from a fresh game.
///
/// Indices are passed to [`Game::apply_move`] unchanged, so off-board or
/// repeated indices and moves after the end are skipped.
#[instrument]
pub fn replay(first: Player, moves: &[i64]) -> Game {
    let mut game = Game::starting_with(first);
    for &index in moves {
        game.apply_move(index);
    }
    info!(
        requested = moves.len(),
        accepted = game.state().history().len(),
        outcome = %game.outcome(),
        "Replay finished"
    );
    game
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    state: &'a crate::games::tictactoe::GameState,
    display: String,
}

/// Text report: the board followed by the result.
pub fn text_report(game: &Game) -> String {
    let state = game.state();
    let result = if game.outcome().is_terminal() {
        game.outcome().to_string()
    } else {
        format!("Next player: {}", state.to_move())
    };
    format!("{}\n\n{}", state.board().display(), result)
}

/// JSON report of the full state.
pub fn json_report(game: &Game) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report {
        state: game.state(),
        display: game.state().board().display(),
    })
}
