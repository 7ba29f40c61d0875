//! Turn resolution.

use super::super::{Board, Player};

/// Returns the player to move, derived from the marks on the board.
///
/// X moves first, so O is to move exactly when X has more marks. Only
/// meaningful for boards reached by strict alternation; other boards get an
/// arbitrary but non-panicking answer.
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_x_to_move() {
        assert_eq!(current_player(&Board::new()), Player::X);
    }

    #[test]
    fn test_turn_alternates_with_counts() {
        let after_x: Board = "X--/---/---".parse().unwrap();
        assert_eq!(current_player(&after_x), Player::O);

        let after_o: Board = "X--/-O-/---".parse().unwrap();
        assert_eq!(current_player(&after_o), Player::X);
    }
}
