//! Command-line interface for gridgames.

use clap::{Parser, Subcommand};
use gridgames::GameKind;
use std::path::PathBuf;

/// Gridgames - grid board games in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridgames")]
#[command(about = "Play tic-tac-toe, connect-4, and gomoku in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal UI
    Play {
        /// Game to play; opens the picker when omitted
        #[arg(value_enum)]
        game: Option<GameKind>,

        /// Path to a JSON catalog file replacing the built-in games
        #[arg(long)]
        games: Option<PathBuf>,
    },

    /// List the games in the catalog
    List {
        /// Path to a JSON catalog file replacing the built-in games
        #[arg(long)]
        games: Option<PathBuf>,
    },
}
