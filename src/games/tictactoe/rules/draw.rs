//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use super::win::winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    !winner(board, Player::X) && !winner(board, Player::O) && is_full(board)
}
