//! Per-cell trial counters.

use crate::error::MonteCarloError;

/// Counts how many trials finished in each cell.
///
/// Cells are zero-based slots; callers map their own state space onto them
/// (row-major for grids, `label - 1` for labelled chains).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    counts: Vec<u64>,
}

impl Occupancy {
    /// Creates a zeroed accumulator with `n_cells` slots.
    ///
    /// # Errors
    ///
    /// Returns [`MonteCarloError::NoCells`] if `n_cells` is zero.
    pub fn new(n_cells: usize) -> Result<Self, MonteCarloError> {
        if n_cells == 0 {
            return Err(MonteCarloError::NoCells);
        }
        Ok(Self {
            counts: vec![0; n_cells],
        })
    }

    /// Records one completed trial ending in `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`MonteCarloError::CellOutOfRange`] if `cell` has no slot.
    pub fn record(&mut self, cell: usize) -> Result<(), MonteCarloError> {
        let n_cells = self.counts.len();
        let slot = self
            .counts
            .get_mut(cell)
            .ok_or(MonteCarloError::CellOutOfRange { cell, n_cells })?;
        *slot += 1;
        Ok(())
    }

    /// Adds another accumulator's counts into this one.
    ///
    /// # Errors
    ///
    /// Returns [`MonteCarloError::CellCountMismatch`] if the shapes differ.
    pub fn merge(&mut self, other: &Occupancy) -> Result<(), MonteCarloError> {
        if other.counts.len() != self.counts.len() {
            return Err(MonteCarloError::CellCountMismatch {
                expected: self.counts.len(),
                got: other.counts.len(),
            });
        }
        for (a, b) in self.counts.iter_mut().zip(&other.counts) {
            *a += b;
        }
        Ok(())
    }

    /// Number of cells tracked.
    pub fn n_cells(&self) -> usize {
        self.counts.len()
    }

    /// Count for `cell` (0 if it has no slot).
    pub fn count(&self, cell: usize) -> u64 {
        self.counts.get(cell).copied().unwrap_or(0)
    }

    /// All counts in cell order.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of recorded trials.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Fraction of recorded trials that ended in `cell`.
    ///
    /// Returns 0.0 when nothing has been recorded.
    pub fn proportion(&self, cell: usize) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(cell) as f64 / total as f64
    }

    /// Fractions for every cell, in cell order.
    pub fn proportions(&self) -> Vec<f64> {
        (0..self.counts.len()).map(|c| self.proportion(c)).collect()
    }
}
