//! Game implementations.

pub mod grid;
pub mod tictactoe;
