//! Cursor movement for keyboard navigation.

use super::{Cell, SIZE};

/// A step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

/// Moves the cursor one cell, staying put at the edges.
pub fn move_cursor(cursor: Cell, direction: Direction) -> Cell {
    let Cell { row, col } = cursor;
    match direction {
        Direction::Up => Cell { row: row.saturating_sub(1), col },
        Direction::Down => Cell { row: (row + 1).min(SIZE - 1), col },
        Direction::Left => Cell { row, col: col.saturating_sub(1) },
        Direction::Right => Cell { row, col: (col + 1).min(SIZE - 1) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_one_step() {
        let start = Cell { row: 4, col: 4 };
        assert_eq!(move_cursor(start, Direction::Up), Cell { row: 3, col: 4 });
        assert_eq!(move_cursor(start, Direction::Down), Cell { row: 5, col: 4 });
        assert_eq!(move_cursor(start, Direction::Left), Cell { row: 4, col: 3 });
        assert_eq!(move_cursor(start, Direction::Right), Cell { row: 4, col: 5 });
    }

    #[test]
    fn test_clamps_at_edges() {
        let top_left = Cell { row: 0, col: 0 };
        assert_eq!(move_cursor(top_left, Direction::Up), top_left);
        assert_eq!(move_cursor(top_left, Direction::Left), top_left);

        let bottom_right = Cell { row: 8, col: 8 };
        assert_eq!(move_cursor(bottom_right, Direction::Down), bottom_right);
        assert_eq!(move_cursor(bottom_right, Direction::Right), bottom_right);
    }
}
