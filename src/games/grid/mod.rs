//! Sudoku-style number grid.
//!
//! A separate mode from tic-tac-toe with its own state. Cells hold 0-9,
//! where 0 is blank. Tapping a cell selects it; tapping the selected cell
//! again steps its value, wrapping from 9 back to 0.

mod cursor;

pub use cursor::{Direction, move_cursor};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Cells per side.
pub const SIZE: usize = 9;

/// Cells per side of a box.
pub const BOX: usize = 3;

/// Largest value a cell can hold.
pub const MAX_VALUE: u8 = 9;

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Cell {
    /// Creates a cell coordinate, or `None` when it is off the grid.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// Index of the 3x3 box containing this cell, row-major.
    pub fn box_index(self) -> usize {
        (self.row / BOX) * BOX + self.col / BOX
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

/// The value after `value` when a selected cell is tapped again.
pub fn next_value(value: u8) -> u8 {
    if value >= MAX_VALUE { 0 } else { value + 1 }
}

/// 9x9 number grid with an optional selected cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberGrid {
    cells: [[u8; SIZE]; SIZE],
    selected: Option<Cell>,
}

impl NumberGrid {
    /// Creates an empty grid with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value at `cell`.
    pub fn value(&self, cell: Cell) -> u8 {
        self.cells[cell.row][cell.col]
    }

    /// The selected cell, if any.
    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    /// Rows of cell values.
    pub fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// Taps the cell at `(row, col)`.
    ///
    /// Tapping an unselected cell selects it. Tapping the selected cell
    /// steps its value. Coordinates off the grid are ignored.
    #[instrument(skip(self))]
    pub fn tap(&mut self, row: usize, col: usize) {
        let Some(cell) = Cell::new(row, col) else {
            debug!("Tap outside grid ignored");
            return;
        };

        if self.selected == Some(cell) {
            let value = next_value(self.value(cell));
            self.cells[row][col] = value;
            debug!(%cell, value, "Cycled cell");
        } else {
            self.selected = Some(cell);
            debug!(%cell, "Selected cell");
        }
    }

    /// Writes `value` into the selected cell.
    ///
    /// Ignored when nothing is selected or `value` is above 9.
    #[instrument(skip(self))]
    pub fn set_selected(&mut self, value: u8) {
        match self.selected {
            Some(cell) if value <= MAX_VALUE => {
                self.cells[cell.row][cell.col] = value;
                debug!(%cell, value, "Set cell");
            }
            _ => debug!("Number input ignored"),
        }
    }

    /// Moves the selection one step, selecting the center when none is set.
    #[instrument(skip(self))]
    pub fn move_selection(&mut self, direction: Direction) {
        let from = self.selected.unwrap_or(Cell { row: 4, col: 4 });
        self.selected = Some(move_cursor(from, direction));
    }

    /// Blanks every cell and drops the selection.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Cells whose value repeats in their row, column, or box.
    pub fn conflicts(&self) -> BTreeSet<Cell> {
        let mut conflicts = BTreeSet::new();
        let all: Vec<Cell> = (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Cell { row, col }))
            .collect();

        for (i, &a) in all.iter().enumerate() {
            let value = self.value(a);
            if value == 0 {
                continue;
            }
            for &b in &all[i + 1..] {
                let shares_unit =
                    a.row == b.row || a.col == b.col || a.box_index() == b.box_index();
                if shares_unit && self.value(b) == value {
                    conflicts.insert(a);
                    conflicts.insert(b);
                }
            }
        }
        conflicts
    }

    /// Every cell filled and no repeats.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().flatten().all(|v| *v != 0) && self.conflicts().is_empty()
    }

    /// Number of non-blank cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|v| **v != 0).count()
    }
}
