//! Game engine for tic-tac-toe.
//!
//! A [`Game`] owns the one board of a match. Human moves are applied with
//! [`Game::place`], computer moves come from [`Game::best_move`], and the
//! board is reset in place when a new match starts.

use super::action::MoveError;
use super::rules;
use super::search::{self, Analysis};
use super::{Board, Move, Outcome, Player};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game continuing from an existing position.
    ///
    /// The history starts empty, so earlier moves cannot be undone.
    #[instrument(skip(board))]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves placed through this game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        rules::current_player(&self.board)
    }

    /// Returns whether the game is ongoing, won or drawn.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Returns true once a line is completed or the board is full.
    pub fn is_over(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    /// Empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.board)
    }

    /// Places the mark of the player to move and returns the new outcome.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the board is already terminal.
    /// - `MoveError::SquareOccupied` if the cell is taken.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn place(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(mv) {
            return Err(MoveError::SquareOccupied(mv));
        }

        let player = self.to_move();
        self.board.place(mv, player);
        self.history.push(mv);

        let outcome = self.outcome();
        debug!(%mv, %outcome, "Move applied");
        Ok(outcome)
    }

    /// Takes back the most recent move placed through this game.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.board.clear(mv);
        debug!(%mv, "Move undone");
        Some(mv)
    }

    /// Clears the board for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
    }

    /// Searches the current position for the side to move.
    pub fn analyze(&mut self) -> Option<Analysis> {
        search::analyze(&mut self.board)
    }

    /// Chooses the optimal move for the side to move.
    ///
    /// The board is borrowed mutably for the duration of the search and is
    /// unchanged when this returns.
    pub fn best_move(&mut self) -> Option<Move> {
        search::best_move(&mut self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_place_alternates_players() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.place(mv(1, 1)), Ok(Outcome::Ongoing));
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[mv(1, 1)]);
    }

    #[test]
    fn test_place_occupied_square() {
        let mut game = Game::new();
        game.place(mv(1, 1)).unwrap();
        let before = game.board().clone();

        assert_eq!(game.place(mv(1, 1)), Err(MoveError::SquareOccupied(mv(1, 1))));
        assert_eq!(game.board(), &before);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_place_after_game_over() {
        let mut game = Game::from_board("XXX/OO-/---".parse().unwrap());
        assert_eq!(game.place(mv(2, 2)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_undo_restores_board() {
        let mut game = Game::new();
        game.place(mv(0, 0)).unwrap();
        let before = game.board().clone();

        game.place(mv(2, 1)).unwrap();
        assert_eq!(game.undo(), Some(mv(2, 1)));
        assert_eq!(game.board(), &before);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_undo_on_fresh_game() {
        let mut game = Game::new();
        assert_eq!(game.undo(), None);
    }

    #[test]
    fn test_reset_clears_board_and_history() {
        let mut game = Game::new();
        game.place(mv(0, 0)).unwrap();
        game.place(mv(1, 1)).unwrap();
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_best_move_leaves_board_untouched() {
        let mut game = Game::from_board("X--/-O-/---".parse().unwrap());
        let before = game.board().clone();
        assert!(game.best_move().is_some());
        assert_eq!(game.board(), &before);
    }
}
