//! Computer player backed by the minimax search.

use super::Player;
use crate::console::Console;
use crate::games::tictactoe::{Game, Move};
use anyhow::{Result, anyhow};
use tracing::{debug, instrument};

/// Computer player that always plays the optimal move.
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, game: &mut Game, console: &mut Console<'_>) -> Result<Move> {
        console.say(format!("{}'s turn:", self.name))?;

        let analysis = game
            .analyze()
            .ok_or_else(|| anyhow!("No valid moves available"))?;
        debug!(
            chosen = %analysis.best_move(),
            score = analysis.score(),
            nodes = analysis.nodes(),
            "Computer chose move"
        );
        Ok(*analysis.best_move())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_announces_and_takes_win() {
        let mut game = Game::from_board("XX-/OO-/---".parse().unwrap());
        let before = game.board().clone();
        let mut input = Cursor::new(String::new());
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        let mv = MinimaxPlayer::new("Computer")
            .choose_move(&mut game, &mut console)
            .unwrap();
        drop(console);

        assert_eq!(mv, Move::new(0, 2).unwrap());
        assert_eq!(game.board(), &before);
        assert_eq!(String::from_utf8(output).unwrap(), "Computer's turn:\n");
    }

    #[test]
    fn test_finished_game_is_an_error() {
        let mut game = Game::from_board("XXX/OO-/---".parse().unwrap());
        let mut input = Cursor::new(String::new());
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        assert!(
            MinimaxPlayer::new("Computer")
                .choose_move(&mut game, &mut console)
                .is_err()
        );
    }
}
