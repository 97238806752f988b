//! Error types for the chainsim-metropolis crate.

use chainsim_grid::GridError;
use chainsim_montecarlo::MonteCarloError;

/// Error type for all fallible operations in the chainsim-metropolis crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetropolisError {
    /// A state index, coordinate, direction or weight table was rejected.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The Monte-Carlo run was misconfigured or a trial left the grid.
    #[error(transparent)]
    MonteCarlo(#[from] MonteCarloError),
}
