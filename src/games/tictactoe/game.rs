//! The tic-tac-toe engine.
//!
//! Owns the [`GameState`] and is the only thing that changes it. Invalid
//! requests (off-board index, taken square, finished game) leave the state
//! untouched.

use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::position::Position;
use super::rules;
use super::types::{GameState, Outcome, Player};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
    first: Player,
}

impl Game {
    /// Creates a new game with X to move first.
    #[instrument]
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Creates a new game with `first` to move first.
    ///
    /// Every later [`Game::reset`] hands the first move back to `first`.
    #[instrument]
    pub fn starting_with(first: Player) -> Self {
        Self {
            state: GameState::new(first),
            first,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The player who moves first after a reset.
    pub fn first_player(&self) -> Player {
        self.first
    }

    /// Places the current player's mark at board index `index`.
    ///
    /// Does nothing when the index is off the board, the square is taken,
    /// or the game is over.
    #[instrument(skip(self), fields(to_move = %self.state.to_move()))]
    pub fn apply_move<I>(&mut self, index: I)
    where
        I: TryInto<usize> + Copy + std::fmt::Debug,
    {
        if let Err(e) = self.try_move(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Like [`Game::apply_move`], but reports why a move was ignored.
    ///
    /// On `Err` the state is exactly as it was before the call.
    #[instrument(skip(self))]
    pub fn try_move<I>(&mut self, index: I) -> Result<Position, MoveError>
    where
        I: TryInto<usize> + Copy + std::fmt::Debug,
    {
        let pos = index
            .try_into()
            .ok()
            .and_then(Position::from_index)
            .ok_or_else(|| MoveError::OutOfRange(format!("{:?}", index)))?;
        self.play(pos)?;
        Ok(pos)
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(to_move = %self.state.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.state.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }

        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.state.place(pos);
        let outcome = rules::evaluate(self.state.board());
        self.state.set_outcome(outcome);

        debug_assert!(
            TicTacToeInvariants::check_all(&self.state).is_ok(),
            "game invariants violated after {}",
            pos
        );

        match outcome {
            Outcome::InProgress => debug!(next = %self.state.to_move(), "Move applied"),
            _ => info!(%outcome, moves = self.state.history().len(), "Game over"),
        }

        Ok(())
    }

    /// Starts over: empty board, first player to move, game in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(first = %self.first, "Resetting game");
        self.state = GameState::new(self.first);
    }

    /// Convenience accessor for the outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn played(moves: &[usize]) -> Game {
        let mut game = Game::new();
        for &m in moves {
            game.apply_move(m);
        }
        game
    }

    #[test]
    fn test_first_move_marks_x() {
        let game = played(&[4]);
        assert_eq!(game.state().board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.state().to_move(), Player::O);
    }

    #[test]
    fn test_try_move_reports_reasons() {
        let mut game = Game::new();
        assert_eq!(game.try_move(9usize), Err(MoveError::OutOfRange("9".to_string())));
        assert_eq!(game.try_move(-1i32), Err(MoveError::OutOfRange("-1".to_string())));
        assert_eq!(game.try_move(0u8), Ok(Position::TopLeft));
        assert_eq!(game.try_move(0u8), Err(MoveError::SquareOccupied(Position::TopLeft)));
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let mut game = played(&[0, 3, 1, 4, 2]);
        assert_eq!(game.outcome(), Outcome::Won(Player::X));
        assert_eq!(game.try_move(8usize), Err(MoveError::GameOver));
    }

    #[test]
    fn test_starting_with_o() {
        let mut game = Game::starting_with(Player::O);
        game.apply_move(0);
        assert_eq!(game.state().board().get(Position::TopLeft), Square::Occupied(Player::O));
        game.reset();
        assert_eq!(game.state().to_move(), Player::O);
        assert_eq!(game.first_player(), Player::O);
    }
}
