//! Command-line interface for numpad_games.

use crate::device::ProfileSetting;
use crate::games::tictactoe::Player;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Numpad Games - tic-tac-toe and a number grid in the terminal
#[derive(Parser, Debug)]
#[command(name = "numpad_games")]
#[command(about = "Tic-tac-toe on the numeric keypad, plus a number grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./numpad_games.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override which instructions are shown
    #[arg(long, global = true, value_enum)]
    pub input_profile: Option<ProfileSetting>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe in the terminal
    Play {
        /// Who moves first (X or O)
        #[arg(long, value_parser = parse_player)]
        first: Option<Player>,
    },

    /// Fill in the number grid in the terminal
    Grid,

    /// Apply board indices (0-8) and print the result
    Replay {
        /// Comma-separated board indices, e.g. 0,3,1,4,2
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        moves: Vec<i64>,

        /// Who moves first (X or O)
        #[arg(long, value_parser = parse_player)]
        first: Option<Player>,

        /// Print the state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses `X` or `O`, case-insensitively.
pub fn parse_player(s: &str) -> Result<Player, String> {
    match s.trim() {
        "x" | "X" => Ok(Player::X),
        "o" | "O" => Ok(Player::O),
        other => Err(format!("expected X or O, got {:?}", other)),
    }
}
