//! Error types for the chainsim-montecarlo crate.

/// Error type for all fallible operations in the chainsim-montecarlo crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonteCarloError {
    /// Returned when a run is configured with zero trials.
    #[error("iteration count must be at least 1")]
    ZeroIterations,

    /// Returned when a run is configured with zero chunks.
    #[error("chunk count must be at least 1")]
    ZeroChunks,

    /// Returned when an accumulator would have no cells to count into.
    #[error("occupancy accumulator needs at least one cell")]
    NoCells,

    /// Returned when a trial reports a cell the accumulator does not have.
    #[error("trial ended in cell {cell}, but only {n_cells} cells are tracked")]
    CellOutOfRange {
        /// Cell reported by the trial.
        cell: usize,
        /// Number of cells in the accumulator.
        n_cells: usize,
    },

    /// Returned when merging accumulators of different shapes.
    #[error("cannot merge occupancy with {got} cells into one with {expected}")]
    CellCountMismatch {
        /// Cells in the receiving accumulator.
        expected: usize,
        /// Cells in the merged accumulator.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_zero_iterations() {
        assert_eq!(
            MonteCarloError::ZeroIterations.to_string(),
            "iteration count must be at least 1"
        );
    }

    #[test]
    fn error_cell_out_of_range() {
        let e = MonteCarloError::CellOutOfRange {
            cell: 9,
            n_cells: 9,
        };
        assert_eq!(
            e.to_string(),
            "trial ended in cell 9, but only 9 cells are tracked"
        );
    }

    #[test]
    fn error_cell_count_mismatch() {
        let e = MonteCarloError::CellCountMismatch {
            expected: 3,
            got: 9,
        };
        assert_eq!(
            e.to_string(),
            "cannot merge occupancy with 9 cells into one with 3"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<MonteCarloError>();
    }
}
