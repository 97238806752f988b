//! Grid cell coordinates.

use crate::direction::Direction;

/// A `(row, col)` position, possibly outside the grid.
///
/// Positions are plain values: equality is by coordinate pair and stepping
/// returns a new state. Off-grid positions are legitimate proposal candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridState {
    row: i64,
    col: i64,
}

impl GridState {
    /// Creates a state at the given coordinates.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Row coordinate (0 is the top row).
    pub fn row(self) -> i64 {
        self.row
    }

    /// Column coordinate (0 is the left column).
    pub fn col(self) -> i64 {
        self.col
    }

    /// Returns the neighbouring position in `direction`, without clipping.
    pub fn step(self, direction: Direction) -> GridState {
        let (dr, dc) = direction.delta();
        GridState::new(self.row + dr, self.col + dc)
    }

    /// Returns `true` if `other` is one step away in some direction.
    pub fn is_adjacent(self, other: GridState) -> bool {
        Direction::ALL.iter().any(|&d| self.step(d) == other)
    }
}
