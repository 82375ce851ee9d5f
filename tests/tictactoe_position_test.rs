//! Tests for tic-tac-toe positions.

use numpad_games::Position;
use strum::IntoEnumIterator;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_numpad_keys() {
    assert_eq!(Position::TopLeft.numpad_key(), '7');
    assert_eq!(Position::Center.numpad_key(), '5');
    assert_eq!(Position::BottomRight.numpad_key(), '3');
}


#[test]
fn test_iteration_follows_board_order() {
    let positions: Vec<_> = Position::iter().collect();
    assert_eq!(positions, Position::ALL.to_vec());
    assert!(positions.iter().enumerate().all(|(i, pos)| pos.to_index() == i));
}
