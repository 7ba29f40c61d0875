//! Exhaustive minimax search over the tic-tac-toe game tree.
//!
//! X maximizes the score and O minimizes it (see [`rules::evaluate`]).
//! Every position is searched to the end of the game; there is no pruning
//! and no transposition table.
//!
//! The search works on one board in place. Each trial move is placed,
//! scored, and cleared again before the next one is tried, so every
//! function here hands the board back exactly as it received it.

use super::rules::{self, Score};
use super::{Board, Move, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{debug, instrument};

/// The decision reached for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, new)]
pub struct Analysis {
    /// Player the move is chosen for.
    to_move: Player,
    /// First move (row-major) reaching the best score.
    best_move: Move,
    /// Minimax score of the position after `best_move`.
    score: Score,
    /// Positions visited by the search.
    nodes: u64,
}

/// Value functions with a visited-position counter.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    fn max_value(&mut self, board: &mut Board) -> Score {
        self.nodes += 1;
        if rules::is_terminal(board) {
            return rules::evaluate(board);
        }

        let mut value = Score::MIN;
        for mv in rules::legal_moves(board) {
            board.place(mv, Player::X);
            value = value.max(self.min_value(board));
            board.clear(mv);
        }
        value
    }

    fn min_value(&mut self, board: &mut Board) -> Score {
        self.nodes += 1;
        if rules::is_terminal(board) {
            return rules::evaluate(board);
        }

        let mut value = Score::MAX;
        for mv in rules::legal_moves(board) {
            board.place(mv, Player::O);
            value = value.min(self.max_value(board));
            board.clear(mv);
        }
        value
    }

    /// Value of the position once `player` has moved, i.e. with the
    /// opponent to reply.
    fn reply_value(&mut self, board: &mut Board, player: Player) -> Score {
        match player {
            Player::X => self.min_value(board),
            Player::O => self.max_value(board),
        }
    }
}

/// Best score X can force from this position against optimal defence.
pub fn max_value(board: &mut Board) -> Score {
    Search::default().max_value(board)
}

/// Best score O can force from this position against optimal defence.
pub fn min_value(board: &mut Board) -> Score {
    Search::default().min_value(board)
}

/// Searches the position for the side to move.
///
/// Returns `None` on a finished board. Otherwise every legal move is tried
/// in row-major order and the first one strictly better than all before it
/// is kept, so ties go to the earliest cell.
#[instrument(skip(board))]
pub fn analyze(board: &mut Board) -> Option<Analysis> {
    if rules::is_terminal(board) {
        debug!("Board is terminal, no move to search");
        return None;
    }

    let player = rules::current_player(board);
    let mut search = Search::default();
    let mut best_value = match player {
        Player::X => Score::MIN,
        Player::O => Score::MAX,
    };
    let mut best_move = None;

    for mv in rules::legal_moves(board) {
        board.place(mv, player);
        let value = search.reply_value(board, player);
        board.clear(mv);

        let better = match player {
            Player::X => value > best_value,
            Player::O => value < best_value,
        };
        if better {
            best_value = value;
            best_move = Some(mv);
        }
    }

    let analysis = best_move.map(|mv| Analysis::new(player, mv, best_value, search.nodes));
    if let Some(analysis) = &analysis {
        debug!(
            player = %player,
            chosen = %analysis.best_move,
            score = analysis.score,
            nodes = analysis.nodes,
            "Search complete"
        );
    }
    analysis
}

/// Chooses the optimal move for the side to move.
pub fn best_move(board: &mut Board) -> Option<Move> {
    analyze(board).map(|analysis| analysis.best_move)
}
