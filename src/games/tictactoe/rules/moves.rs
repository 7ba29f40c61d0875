//! Legal move enumeration.

use super::super::{Board, Move};

/// Every empty cell, in row-major order.
///
/// The order is part of the contract: the search keeps the first of several
/// equally good moves, so this ordering decides ties.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    Move::ALL
        .iter()
        .copied()
        .filter(|&mv| board.is_empty(mv))
        .collect()
}
