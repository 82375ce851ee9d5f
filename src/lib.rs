//! Numpad Games library - tic-tac-toe and a number grid
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe engine and the number grid, each with its
//!   own state
//! - **TUI**: ratatui front end driven by keys and mouse clicks
//! - **Config**: TOML settings and input-device detection
//!
//! # Example
//!
//! ```
//! use numpad_games::{Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod device;
pub mod games;
mod replay;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command, parse_player};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
pub use device::{InputProfile, ProfileSetting};

// Crate-level exports - Replay
pub use replay::{json_report, replay, text_report};

// Crate-level exports - Game types
pub use games::grid::{Cell, NumberGrid};
pub use games::tictactoe::{
    Board, Game, GameState, Move, MoveError, Outcome, Player, Position, Square,
};
