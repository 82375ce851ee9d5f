//! Tic-tac-toe: board, rules, and the move engine.

mod action;
mod game;
pub mod invariants;
pub mod keymap;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use types::{Board, GameState, Outcome, Player, Square};
