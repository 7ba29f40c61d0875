//! Minimax Tic-Tac-Toe library - perfect play on a 3x3 board
//!
//! The engine searches the complete game tree with plain minimax and never
//! loses. A thin console layer lets a human play against it.
//!
//! # Architecture
//!
//! - **Games**: board, rules and minimax search (`games::tictactoe`)
//! - **Console**: line-based players and the game loop
//! - **Config**: TOML settings for the console
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Board, Move, best_move};
//!
//! let mut board: Board = "XX-/OO-/---".parse().unwrap();
//! assert_eq!(best_move(&mut board), Some(Move::new(0, 2).unwrap()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConsoleConfig};

// Crate-level exports - Console
pub use console::Console;
pub use console::Orchestrator;
pub use console::players::{HumanPlayer, MinimaxPlayer, Player as ConsolePlayer};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Analysis, Board, BoardParseError, Game, Mark, Move, MoveError, Outcome, Player, Score,
    Square,
};

// Crate-level exports - Rules and search
pub use games::tictactoe::rules::{
    check_winner, current_player, evaluate, is_draw, is_full, is_terminal, legal_moves, outcome,
    winner, winning_line,
};
pub use games::tictactoe::search::{analyze, best_move, max_value, min_value};
