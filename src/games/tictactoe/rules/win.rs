//! Win detection logic for tic-tac-toe.

use super::super::{Board, Move, Player, Square};

/// The eight winning lines as row-major board indices.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `player` occupies every cell of some row, column or
/// diagonal.
pub fn winner(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    let squares = board.squares();
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| squares[index] == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row, `None`
/// otherwise. X is reported first on an (unreachable) board where both
/// players hold a line.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| winner(board, player))
}

/// Returns the cells of the first line `player` has completed.
pub fn winning_line(board: &Board, player: Player) -> Option<[Move; 3]> {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .find(|line| line.iter().all(|&index| board.squares()[index] == mark))
        .map(|&line| line.map(|index| Move::ALL[index]))
}
