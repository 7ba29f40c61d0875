//! Core domain types for tic-tac-toe.

use super::position::Move;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes the score).
    X,
    /// Player O (goes second, minimizes the score).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// A single board is shared by the game loop and the search. The search marks
/// squares speculatively and clears them again before returning, so a board
/// borrowed mutably by a search call comes back cell-for-cell identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, mv: Move) -> Square {
        self.squares[mv.to_index()]
    }

    /// Sets the square at the given cell.
    pub fn set(&mut self, mv: Move, square: Square) {
        self.squares[mv.to_index()] = square;
    }

    /// Marks the cell for `player`.
    pub fn place(&mut self, mv: Move, player: Player) {
        self.set(mv, Square::Occupied(player));
    }

    /// Restores the cell to empty.
    pub fn clear(&mut self, mv: Move) {
        self.set(mv, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&sq| sq == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a grid, drawing empty cells with `empty`.
    pub fn display_with(&self, empty: char) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => empty,
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_with('-'))
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),

    /// A cell character was not `X`, `O`, `-`, `.` or `_`.
    #[display("Unrecognized cell character {:?}", _0)]
    UnknownCell(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine row-major cells, e.g. `"XO-/-X-/--O"`.
    ///
    /// Whitespace, `/` and `|` are ignored so a board can be written one row
    /// at a time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '-' | '.' | '_' => Ok(Square::Empty),
                other => Err(BoardParseError::UnknownCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .as_slice()
            .try_into()
            .map_err(|_| BoardParseError::WrongCellCount(cells.len()))?;
        Ok(Self { squares })
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    Ongoing,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "in progress"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
