//! Compass directions for nearest-neighbour moves.

use crate::error::GridError;
use crate::state::GridState;

/// One of the four nearest-neighbour moves on the grid.
///
/// North decreases the row, South increases it; East increases the column,
/// West decreases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    West = 2,
    South = 3,
}

impl Direction {
    /// All four directions in proposal order.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::West, Self::South];

    /// Returns the `(row, col)` offset applied by a move in this direction.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::West => (0, -1),
            Self::South => (1, 0),
        }
    }

    /// Returns the zero-based position of this direction in [`Direction::ALL`].
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Returns the direction that moves `from` onto `to` in one step.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidState`] (reporting `to`) if the two states
    /// are not nearest neighbours. `size` is only used in the error message.
    pub fn between(from: GridState, to: GridState, size: usize) -> Result<Direction, GridError> {
        Self::ALL
            .into_iter()
            .find(|&d| from.step(d) == to)
            .ok_or(GridError::InvalidState {
                row: to.row(),
                col: to.col(),
                size,
            })
    }
}

impl TryFrom<u8> for Direction {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::North),
            1 => Ok(Self::East),
            2 => Ok(Self::West),
            3 => Ok(Self::South),
            _ => Err(GridError::InvalidDirection { value }),
        }
    }
}
