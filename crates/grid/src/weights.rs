//! Steady-state weights used by the Metropolis acceptance rule.
//!
//! Only ratios of weights matter to the sampler, so tables need not be
//! normalised. Every off-grid position has weight zero.

use crate::error::GridError;
use crate::grid::Grid;
use crate::state::GridState;

/// Source of the (unnormalised) target distribution over grid cells.
#[derive(Debug, Clone, PartialEq)]
pub enum SteadyStateWeights {
    /// Every cell shares the same weight.
    ///
    /// The weight is computed as `1.0 / size * size`, which evaluates left to
    /// right to `1.0` rather than `1 / size^2`. The value is constant across
    /// the grid, so acceptance ratios are the same either way.
    Uniform,
    /// Per-cell weights indexed by `state_index - 1`.
    Table(Vec<f64>),
}

impl SteadyStateWeights {
    /// Builds a validated table of per-cell weights for `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WeightTableLength`] if `values.len()` differs from
    /// the number of cells, or [`GridError::InvalidWeight`] for a negative or
    /// non-finite entry.
    pub fn table(values: &[f64], grid: &Grid) -> Result<Self, GridError> {
        if values.len() != grid.n_states() {
            return Err(GridError::WeightTableLength {
                expected: grid.n_states(),
                got: values.len(),
            });
        }
        if let Some((i, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(GridError::InvalidWeight {
                index: i + 1,
                value,
            });
        }
        Ok(Self::Table(values.to_vec()))
    }

    /// Returns the weight of `state`, or 0.0 if it is off the grid.
    pub fn weight(&self, grid: &Grid, state: GridState) -> f64 {
        let Ok(offset) = grid.offset_of(state) else {
            return 0.0;
        };
        match self {
            Self::Uniform => {
                let size = grid.size() as f64;
                1.0 / size * size
            }
            Self::Table(values) => values.get(offset).copied().unwrap_or(0.0),
        }
    }
}
