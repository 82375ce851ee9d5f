//! Tests for the tic-tac-toe engine: scenarios and properties.

use numpad_games::{Game, GameState, Outcome, Player, Position, Square};
use proptest::prelude::*;

fn play(game: &mut Game, moves: &[i64]) {
    for &index in moves {
        game.apply_move(index);
    }
}

#[test]
fn test_top_row_win() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4]);
    assert_eq!(game.outcome(), Outcome::InProgress);

    game.apply_move(2);
    assert_eq!(game.outcome(), Outcome::Won(Player::X));
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        assert_eq!(game.state().board().get(pos), Square::Occupied(Player::X));
    }
}

#[test]
fn test_full_board_draw_o_first() {
    // Ends as X O X / O X O / O X O.
    let mut game = Game::starting_with(Player::O);
    play(&mut game, &[1, 0, 3, 2, 5, 4, 6, 7]);
    assert_eq!(game.outcome(), Outcome::InProgress);

    game.apply_move(8);
    assert_eq!(game.outcome(), Outcome::Draw);
    let marks: Vec<_> = game
        .state()
        .board()
        .squares()
        .iter()
        .map(|s| s.player())
        .collect();
    use Player::{O, X};
    assert_eq!(marks, [X, O, X, O, X, O, O, X, O].map(Some).to_vec());
}

#[test]
fn test_full_board_draw_x_first() {
    let mut game = Game::new();
    play(&mut game, &[1, 0, 3, 2, 5, 4, 6, 7, 8]);
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.state().board().occupied(), 9);
}

#[test]
fn test_occupied_square_is_noop() {
    let mut game = Game::new();
    game.apply_move(4);
    let before = game.state().clone();

    game.apply_move(4);
    assert_eq!(game.state(), &before);
    assert_eq!(game.state().to_move(), Player::O);
}

#[test]
fn test_out_of_range_is_noop() {
    let mut game = Game::new();
    game.apply_move(2);
    let before = game.state().clone();

    game.apply_move(9);
    game.apply_move(-1);
    game.apply_move(i64::MAX);
    game.apply_move(usize::MAX);
    assert_eq!(game.state(), &before);
}

#[test]
fn test_moves_after_win_are_noops() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let before = game.state().clone();

    play(&mut game, &[5, 6, 7, 8]);
    assert_eq!(game.state(), &before);
}

#[test]
fn test_reset_after_win() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    game.reset();
    assert_eq!(game.state(), &GameState::new(Player::X));
    assert!(game.state().history().is_empty());
}

#[test]
fn test_reset_after_draw_keeps_first_player() {
    let mut game = Game::starting_with(Player::O);
    play(&mut game, &[1, 0, 3, 2, 5, 4, 6, 7, 8]);
    assert_eq!(game.outcome(), Outcome::Draw);

    game.reset();
    assert_eq!(game.state(), &GameState::new(Player::O));
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_reset_mid_game() {
    let mut game = Game::new();
    play(&mut game, &[4, 0]);
    game.reset();
    assert_eq!(game.state().board().occupied(), 0);
    assert_eq!(game.state().to_move(), Player::X);
}

proptest! {
    #[test]
    fn marks_never_exceed_moves(moves in proptest::collection::vec(-3i64..12, 0..30)) {
        let mut game = Game::new();
        for (applied, &index) in moves.iter().enumerate() {
            game.apply_move(index);
            prop_assert!(game.state().board().occupied() <= applied + 1);
            prop_assert_eq!(game.state().board().occupied(), game.state().history().len());
        }
    }

    #[test]
    fn turn_flips_only_on_accepted_moves(moves in proptest::collection::vec(0i64..9, 0..20)) {
        let mut game = Game::new();
        for &index in &moves {
            let before = game.state().clone();
            game.apply_move(index);
            let after = game.state();
            if after.history().len() > before.history().len() {
                prop_assert_eq!(after.to_move(), before.to_move().opponent());
            } else {
                prop_assert_eq!(after, &before);
            }
        }
    }

    #[test]
    fn terminal_state_is_frozen(moves in proptest::collection::vec(0i64..9, 9..40)) {
        let mut game = Game::new();
        let mut frozen: Option<GameState> = None;
        for &index in &moves {
            game.apply_move(index);
            if let Some(state) = &frozen {
                prop_assert_eq!(game.state(), state);
            } else if game.outcome() != Outcome::InProgress {
                frozen = Some(game.state().clone());
            }
        }
    }

    #[test]
    fn squares_never_change_once_marked(moves in proptest::collection::vec(0i64..9, 0..20)) {
        let mut game = Game::new();
        let mut seen = [Square::Empty; 9];
        for &index in &moves {
            game.apply_move(index);
            for (old, new) in seen.iter().zip(game.state().board().squares()) {
                if *old != Square::Empty {
                    prop_assert_eq!(old, new);
                }
            }
            seen = *game.state().board().squares();
        }
    }
}
