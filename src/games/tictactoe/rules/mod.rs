//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the game loop share one definition.

pub mod draw;
pub mod moves;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::legal_moves;
pub use turn::current_player;
pub use win::{check_winner, winner, winning_line};

use super::{Board, Outcome, Player};

/// Minimax score: `+1` X has won, `-1` O has won, `0` otherwise.
pub type Score = i32;

/// Returns true if some player has won or the board is drawn.
pub fn is_terminal(board: &Board) -> bool {
    winner(board, Player::X) || winner(board, Player::O) || is_draw(board)
}

/// Scores a board from X's point of view.
///
/// Only meaningful on terminal boards: a non-terminal board scores `0`
/// just like a draw.
pub fn evaluate(board: &Board) -> Score {
    if winner(board, Player::X) {
        1
    } else if winner(board, Player::O) {
        -1
    } else {
        0
    }
}

/// Classifies the board as ongoing, won or drawn.
pub fn outcome(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(player) => Outcome::Won(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}
