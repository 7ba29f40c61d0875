//! Human player that types row and column at the console.

use super::Player;
use crate::console::Console;
use crate::games::tictactoe::{Game, Move};
use anyhow::{Result, bail};
use tracing::{debug, instrument};

/// Human player using line input.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Reads one coordinate, re-prompting until it is 0, 1 or 2.
    fn read_coordinate(console: &mut Console<'_>, prompt: &str) -> Result<usize> {
        loop {
            let Some(reply) = console.ask(prompt)? else {
                bail!("Input closed before a move was entered");
            };
            match reply.parse::<usize>() {
                Ok(value) if value <= 2 => return Ok(value),
                _ => {
                    debug!(%reply, "Rejected coordinate");
                    console.say("Invalid input! Enter 0, 1, or 2.")?;
                }
            }
        }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, game: &mut Game, console: &mut Console<'_>) -> Result<Move> {
        loop {
            console.say("Your turn! Enter row and column (0, 1, or 2).")?;
            let row = Self::read_coordinate(console, "Row: ")?;
            let col = Self::read_coordinate(console, "Col: ")?;
            let mv = Move::new(row, col)?;

            if game.board().is_empty(mv) {
                return Ok(mv);
            }
            debug!(%mv, "Cell occupied, asking again");
            console.say("Cell is already occupied! Try again.")?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
