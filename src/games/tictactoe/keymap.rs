//! Keyboard layout for placing marks.
//!
//! The board follows the numeric keypad, so the key's place on the pad is
//! the square's place on the board:
//!
//! ```text
//! 7 | 8 | 9
//! 4 | 5 | 6
//! 1 | 2 | 3
//! ```
//!
//! Both the plain digit (`"7"`) and the keypad identifier (`"Numpad7"`)
//! name the same square.

use super::Position;

const NUMPAD_PREFIX: &str = "Numpad";

/// Board index for a numpad digit, if it is one of `1`-`9`.
pub fn index_for_digit(digit: char) -> Option<usize> {
    match digit {
        '7' => Some(0),
        '8' => Some(1),
        '9' => Some(2),
        '4' => Some(3),
        '5' => Some(4),
        '6' => Some(5),
        '1' => Some(6),
        '2' => Some(7),
        '3' => Some(8),
        _ => None,
    }
}

/// Board index for a key identifier such as `"7"` or `"Numpad7"`.
pub fn index_for_key(key: &str) -> Option<usize> {
    let digits = key.strip_prefix(NUMPAD_PREFIX).unwrap_or(key);
    let mut chars = digits.chars();
    match (chars.next(), chars.next()) {
        (Some(digit), None) => index_for_digit(digit),
        _ => None,
    }
}

/// Board position for a key identifier.
pub fn position_for_key(key: &str) -> Option<Position> {
    index_for_key(key).and_then(Position::from_index)
}
