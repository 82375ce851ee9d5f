//! Tests for the number grid.

use numpad_games::{Cell, NumberGrid};

#[test]
fn test_select_then_cycle_wraps_to_zero() {
    let mut grid = NumberGrid::new();
    grid.tap(8, 8);
    grid.set_selected(9);
    grid.tap(8, 8);
    assert_eq!(grid.value(Cell::new(8, 8).unwrap()), 0);
}

#[test]
fn test_independent_of_tictactoe() {
    let mut grid = NumberGrid::new();
    grid.tap(0, 0);
    grid.tap(0, 0);
    assert_eq!(grid.filled(), 1);
    assert!(grid.conflicts().is_empty());
}

#[test]
fn test_box_conflict() {
    let mut grid = NumberGrid::new();
    grid.tap(3, 3);
    grid.set_selected(5);
    grid.tap(5, 5);
    grid.set_selected(5);
    let conflicts = grid.conflicts();
    assert_eq!(conflicts.len(), 2);
    assert!(conflicts.contains(&Cell::new(3, 3).unwrap()));
    assert!(conflicts.contains(&Cell::new(5, 5).unwrap()));
}

#[test]
fn test_cell_bounds() {
    assert!(Cell::new(8, 8).is_some());
    assert!(Cell::new(9, 0).is_none());
    assert_eq!(Cell::new(4, 7).unwrap().box_index(), 5);
}
