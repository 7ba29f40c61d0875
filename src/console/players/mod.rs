//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use super::Console;
use crate::games::tictactoe::{Game, Move};
use anyhow::Result;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The game is borrowed mutably so a searching player can run on the
    /// live board; implementations must leave it as they found it.
    fn choose_move(&mut self, game: &mut Game, console: &mut Console<'_>) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
