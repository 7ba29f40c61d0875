mod action;
mod game;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::MoveError;
pub use game::Game;
pub use position::Move;
pub use rules::Score;
pub use search::Analysis;
pub use types::{Board, BoardParseError, Outcome, Player, Square};

/// Alias for clarity where `Player` also names a participant.
pub type Mark = Player;
