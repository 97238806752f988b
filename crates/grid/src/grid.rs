//! Square grid geometry and index mapping.

use crate::error::GridError;
use crate::state::GridState;

/// A square `size x size` grid with 1-based, row-major state indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Creates a grid with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self { size })
    }

    /// Creates the grid implied by a state count: `size = floor(sqrt(n_states))`.
    ///
    /// Counts that are not perfect squares are truncated, so `n_states = 10`
    /// yields a 3x3 grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if `n_states` is zero.
    pub fn from_state_count(n_states: usize) -> Result<Self, GridError> {
        Self::new(n_states.isqrt())
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`).
    pub fn n_states(&self) -> usize {
        self.size * self.size
    }

    /// Returns `true` if `state` lies on the grid.
    pub fn contains(&self, state: GridState) -> bool {
        let size = self.size as i64;
        (0..size).contains(&state.row()) && (0..size).contains(&state.col())
    }

    /// Maps a 1-based linear index to coordinates.
    ///
    /// `row = (index - 1) / size`, `col = (index - 1) % size`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `index` is not in `1..=n_states`.
    pub fn state(&self, index: usize) -> Result<GridState, GridError> {
        if index == 0 || index > self.n_states() {
            return Err(GridError::IndexOutOfRange {
                index,
                n_states: self.n_states(),
            });
        }
        let offset = index - 1;
        Ok(GridState::new(
            (offset / self.size) as i64,
            (offset % self.size) as i64,
        ))
    }

    /// Maps coordinates back to their 1-based linear index.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidState`] if `state` is off the grid.
    pub fn index_of(&self, state: GridState) -> Result<usize, GridError> {
        self.offset_of(state).map(|offset| offset + 1)
    }

    /// Maps coordinates to a zero-based, row-major cell offset.
    ///
    /// This is the slot used by flat per-cell accumulators.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidState`] if `state` is off the grid.
    pub fn offset_of(&self, state: GridState) -> Result<usize, GridError> {
        if !self.contains(state) {
            return Err(GridError::InvalidState {
                row: state.row(),
                col: state.col(),
                size: self.size,
            });
        }
        Ok(state.row() as usize * self.size + state.col() as usize)
    }

    /// Iterates over every cell in index order.
    pub fn states(&self) -> impl Iterator<Item = GridState> + '_ {
        (0..self.n_states()).map(move |offset| {
            GridState::new((offset / self.size) as i64, (offset % self.size) as i64)
        })
    }
}
