//! Analytic one-step transition probabilities of the Metropolis walk.

use chainsim_grid::{Direction, Grid, GridState, SteadyStateWeights};

use crate::acceptance::{PROPOSE_PROBABILITY, acceptance_probability};
use crate::error::MetropolisError;

/// Side length of the grid used with a per-cell steady-state table.
pub const BIAS_GRID_SIZE: usize = 3;

/// Probabilities of leaving a state in each of the four directions.
///
/// Entry `d` is `acceptance(w(step(d)), w(from)) * 1/4`. Whatever is left
/// over is the probability of staying put.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalProbabilities {
    probs: [f64; 4],
}

impl DirectionalProbabilities {
    /// Computes the directional move probabilities out of `from`.
    pub fn compute(grid: &Grid, weights: &SteadyStateWeights, from: GridState) -> Self {
        let current = weights.weight(grid, from);
        let probs = Direction::ALL.map(|d| {
            let candidate = weights.weight(grid, from.step(d));
            acceptance_probability(candidate, current) * PROPOSE_PROBABILITY
        });
        Self { probs }
    }

    /// Probability of moving in `direction`.
    pub fn get(&self, direction: Direction) -> f64 {
        self.probs[direction.as_index()]
    }

    /// All four probabilities in [`Direction::ALL`] order.
    pub fn as_array(&self) -> &[f64; 4] {
        &self.probs
    }

    /// Total probability of leaving the state.
    pub fn total_out(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Probability of staying put: `1 - total_out`.
    pub fn self_transition(&self) -> f64 {
        1.0 - self.total_out()
    }

    /// Largest single directional probability (0.0 if none is positive).
    pub fn largest(&self) -> f64 {
        self.probs.iter().copied().fold(0.0, f64::max)
    }
}

/// Resolves both state indices and reports whether one step can join them.
fn resolve_pair(
    grid: &Grid,
    s1: usize,
    s2: usize,
) -> Result<(GridState, GridState, bool), MetropolisError> {
    let from = grid.state(s1)?;
    let to = grid.state(s2)?;
    let reachable = s1 == s2 || from.is_adjacent(to);
    Ok((from, to, reachable))
}

/// One-step transition probability from `s1` to `s2` with uniform weights.
///
/// The grid is `floor(sqrt(n_states))` wide. Non-adjacent distinct states
/// give exactly 0. For `s1 == s2` the result is the self-transition
/// probability. For adjacent states the result is the **largest** of the four
/// directional probabilities out of `s1`, not necessarily the one pointing at
/// `s2`. With uniform weights every on-grid neighbour has the same value, so
/// the two only differ in how they are computed.
///
/// # Errors
///
/// Returns [`MetropolisError::Grid`] if `n_states` is zero or either index is
/// outside `1..=size^2`.
pub fn transition_probability(
    s1: usize,
    s2: usize,
    n_states: usize,
) -> Result<f64, MetropolisError> {
    let grid = Grid::from_state_count(n_states)?;
    let (from, _, reachable) = resolve_pair(&grid, s1, s2)?;
    if !reachable {
        return Ok(0.0);
    }
    let probs = DirectionalProbabilities::compute(&grid, &SteadyStateWeights::Uniform, from);
    if s1 == s2 {
        Ok(probs.self_transition())
    } else {
        Ok(probs.largest())
    }
}

/// One-step transition probability from `s1` to `s2` on the 3x3 grid with
/// per-cell steady-state weights `ssp` (indexed by `state - 1`).
///
/// Non-adjacent distinct states give exactly 0; `s1 == s2` gives the
/// self-transition probability; adjacent states give the probability of the
/// specific move from `s1` onto `s2`.
///
/// # Errors
///
/// Returns [`MetropolisError::Grid`] if `ssp` does not hold nine finite,
/// non-negative weights or either index is outside `1..=9`.
pub fn bias_transition_probability(
    s1: usize,
    s2: usize,
    ssp: &[f64],
) -> Result<f64, MetropolisError> {
    let grid = Grid::new(BIAS_GRID_SIZE)?;
    let weights = SteadyStateWeights::table(ssp, &grid)?;
    let (from, to, reachable) = resolve_pair(&grid, s1, s2)?;
    if !reachable {
        return Ok(0.0);
    }
    let probs = DirectionalProbabilities::compute(&grid, &weights, from);
    if s1 == s2 {
        return Ok(probs.self_transition());
    }
    let direction = Direction::between(from, to, grid.size())?;
    Ok(probs.get(direction))
}
