//! Board coordinates for tic-tac-toe moves.

use super::action::MoveError;
use serde::Serialize;
use tracing::instrument;

/// A cell on the board, addressed by row and column (each 0-2).
///
/// A `Move` can only be built in range, so board indexing through it never
/// goes out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All 9 cells in row-major order.
    ///
    /// This order is the exploration order of the search and therefore its
    /// tie-break: among equally good moves, the earliest one here wins.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move, rejecting coordinates outside 0-2.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self::at(row, col))
    }

    /// Row of the cell (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of the cell (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a move from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this cell (for display).
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}
