//! Single-trial Metropolis walk.

use chainsim_grid::{Direction, Grid, GridError, GridState, SteadyStateWeights};
use rand::Rng;

use crate::acceptance::acceptance_probability;
use crate::error::MetropolisError;

/// A fixed-length Metropolis walk on a grid.
///
/// Every trial starts at `start` and makes exactly `n_steps` proposals. The
/// walker can never leave the grid: off-grid candidates have weight zero and
/// an acceptance probability of zero.
#[derive(Debug, Clone)]
pub struct MetropolisWalk {
    grid: Grid,
    weights: SteadyStateWeights,
    start: GridState,
    n_steps: usize,
}

impl MetropolisWalk {
    /// Creates a walk from `start` making `n_steps` proposals per trial.
    ///
    /// # Errors
    ///
    /// Returns [`MetropolisError::Grid`] if `start` is not on the grid.
    pub fn new(
        grid: Grid,
        weights: SteadyStateWeights,
        start: GridState,
        n_steps: usize,
    ) -> Result<Self, MetropolisError> {
        if !grid.contains(start) {
            return Err(GridError::InvalidState {
                row: start.row(),
                col: start.col(),
                size: grid.size(),
            }
            .into());
        }
        Ok(Self {
            grid,
            weights,
            start,
            n_steps,
        })
    }

    /// The grid the walker moves on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The steady-state weights driving acceptance.
    pub fn weights(&self) -> &SteadyStateWeights {
        &self.weights
    }

    /// Starting state of every trial.
    pub fn start(&self) -> GridState {
        self.start
    }

    /// Number of proposals per trial.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Proposes a uniformly random neighbour of `current` (possibly off-grid).
    pub fn propose<R: Rng + ?Sized>(&self, current: GridState, rng: &mut R) -> GridState {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        current.step(direction)
    }

    /// Makes one proposal and returns the state after accepting or rejecting it.
    pub fn step<R: Rng + ?Sized>(&self, current: GridState, rng: &mut R) -> GridState {
        let candidate = self.propose(current, rng);
        let acceptance = acceptance_probability(
            self.weights.weight(&self.grid, candidate),
            self.weights.weight(&self.grid, current),
        );
        let r: f64 = rng.random();
        if r < acceptance { candidate } else { current }
    }

    /// Runs one trial and returns the state after `n_steps` proposals.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> GridState {
        (0..self.n_steps).fold(self.start, |state, _| self.step(state, rng))
    }

    /// Runs one trial and returns the zero-based, row-major cell it ended in.
    ///
    /// An off-grid end state maps to `usize::MAX`, which accumulators reject.
    pub fn run_to_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let end = self.run(rng);
        self.grid.offset_of(end).unwrap_or(usize::MAX)
    }
}
