//! Error types for the chainsim-grid crate.

/// Error type for all fallible operations in the chainsim-grid crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when a grid would have no cells.
    #[error("grid must contain at least one state")]
    EmptyGrid,

    /// Returned when coordinates do not map onto a grid cell, or when no
    /// direction connects two states that should be adjacent.
    #[error("invalid state: ({row}, {col}) is not a cell of the {size}x{size} grid")]
    InvalidState {
        /// Row coordinate.
        row: i64,
        /// Column coordinate.
        col: i64,
        /// Side length of the grid.
        size: usize,
    },

    /// Returned when a linear state index is outside `1..=n_states`.
    #[error("state index {index} out of range (must be 1..={n_states})")]
    IndexOutOfRange {
        /// The rejected 1-based index.
        index: usize,
        /// Number of states on the grid.
        n_states: usize,
    },

    /// Returned when a numeric direction code is outside the enumeration.
    #[error("invalid direction code: {value} (must be 0..=3)")]
    InvalidDirection {
        /// The rejected code.
        value: u8,
    },

    /// Returned when a steady-state table does not have one entry per cell.
    #[error("steady-state table length mismatch: expected {expected}, got {got}")]
    WeightTableLength {
        /// Number of grid cells.
        expected: usize,
        /// Length of the supplied table.
        got: usize,
    },

    /// Returned when a steady-state table entry is negative or non-finite.
    #[error("invalid steady-state weight for state {index}: {value} (must be finite and >= 0)")]
    InvalidWeight {
        /// 1-based state index of the offending entry.
        index: usize,
        /// The offending value.
        value: f64,
    },
}
