//! Command-line interface for minimax_tictactoe.

use minimax_tictactoe::{Board, Mark};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Minimax Tic-Tac-Toe - a computer opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Play perfect tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer
    Play {
        /// Side you play (X moves first); overrides the config file
        #[arg(long)]
        human: Option<Mark>,
    },

    /// Let the computer play both sides
    SelfPlay,

    /// Search a position and report the best move
    Analyze {
        /// Nine row-major cells using X, O and - (e.g. "XO-/-X-/--O")
        board: Board,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
