//! Monte-Carlo occupancy estimates for the Metropolis walk.

use chainsim_grid::{Grid, SteadyStateWeights};
use chainsim_montecarlo::{Occupancy, TrialConfig, accumulate, run_trials};
use rand::Rng;
use tracing::debug;

use crate::error::MetropolisError;
use crate::sampler::MetropolisWalk;
use crate::transition::BIAS_GRID_SIZE;

/// Runs `config.iterations()` independent trials of `walk` in seeded chunks.
///
/// Cell `c` of the result is the row-major offset `row * size + col`.
///
/// # Errors
///
/// Returns [`MetropolisError::MonteCarlo`] if the config is invalid.
pub fn metropolis_occupancy(
    walk: &MetropolisWalk,
    config: &TrialConfig,
) -> Result<Occupancy, MetropolisError> {
    let occupancy = run_trials(config, walk.grid().n_states(), |rng| {
        walk.run_to_cell(rng)
    })?;
    Ok(occupancy)
}

/// Runs `iterations` independent trials of `walk` against one random source.
///
/// # Errors
///
/// Returns [`MetropolisError::MonteCarlo`] if a trial ends off the grid.
pub fn metropolis_occupancy_with_rng<R: Rng + ?Sized>(
    walk: &MetropolisWalk,
    iterations: u64,
    rng: &mut R,
) -> Result<Occupancy, MetropolisError> {
    let occupancy = accumulate(iterations, walk.grid().n_states(), rng, |r| {
        walk.run_to_cell(r)
    })?;
    Ok(occupancy)
}

/// Reads the fraction of trials that ended in state `s2` out of a run.
fn probability_at(
    walk: &MetropolisWalk,
    s2: usize,
    config: &TrialConfig,
) -> Result<f64, MetropolisError> {
    let grid = *walk.grid();
    let target = grid.offset_of(grid.state(s2)?)?;
    let occupancy = metropolis_occupancy(walk, config)?;
    let p = occupancy.count(target) as f64 / config.iterations() as f64;
    debug!(
        hits = occupancy.count(target),
        total = occupancy.total(),
        p,
        "occupancy estimate"
    );
    Ok(p)
}

/// Estimates the probability that a uniform-weight walker started in `s1` is
/// in `s2` after `n_steps` proposals.
///
/// The grid is `floor(sqrt(n_states))` wide. Accuracy improves with
/// `config.iterations()`; the standard error is roughly
/// `sqrt(p (1 - p) / iterations)`.
///
/// # Errors
///
/// Returns [`MetropolisError`] if `n_states` is zero, either index is off the
/// grid, or the config is invalid.
#[tracing::instrument(skip(config), fields(iterations = config.iterations()))]
pub fn estimated_probability(
    s1: usize,
    s2: usize,
    n_states: usize,
    n_steps: usize,
    config: &TrialConfig,
) -> Result<f64, MetropolisError> {
    let grid = Grid::from_state_count(n_states)?;
    let start = grid.state(s1)?;
    let walk = MetropolisWalk::new(grid, SteadyStateWeights::Uniform, start, n_steps)?;
    probability_at(&walk, s2, config)
}

/// Estimates the probability that a walker on the 3x3 grid, weighted by the
/// steady-state table `ssp`, started in `s1` is in `s2` after `n_steps`
/// proposals.
///
/// # Errors
///
/// Returns [`MetropolisError`] if `ssp` is not a valid nine-entry table,
/// either index is off the grid, or the config is invalid.
#[tracing::instrument(skip(ssp, config), fields(iterations = config.iterations()))]
pub fn bias_estimated_probability(
    s1: usize,
    s2: usize,
    ssp: &[f64],
    n_steps: usize,
    config: &TrialConfig,
) -> Result<f64, MetropolisError> {
    let grid = Grid::new(BIAS_GRID_SIZE)?;
    let weights = SteadyStateWeights::table(ssp, &grid)?;
    let start = grid.state(s1)?;
    let walk = MetropolisWalk::new(grid, weights, start, n_steps)?;
    probability_at(&walk, s2, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainsim_grid::GridError;
    use chainsim_montecarlo::MonteCarloError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_config(seed: u64) -> TrialConfig {
        TrialConfig::new()
            .with_iterations(20_000)
            .with_seed(seed)
            .with_chunks(8)
    }

    #[test]
    fn zero_steps_is_a_point_mass() {
        let cfg = small_config(1);
        assert_eq!(estimated_probability(4, 4, 9, 0, &cfg).unwrap(), 1.0);
        assert_eq!(estimated_probability(4, 5, 9, 0, &cfg).unwrap(), 0.0);
    }

    #[test]
    fn one_step_matches_analytic_transition() {
        // From corner 1: stay 0.5, move to 2 or 4 with 0.25 each.
        let cfg = TrialConfig::new().with_iterations(100_000).with_seed(3);
        let stay = estimated_probability(1, 1, 9, 1, &cfg).unwrap();
        let east = estimated_probability(1, 2, 9, 1, &cfg).unwrap();
        assert!((stay - 0.5).abs() < 0.01, "stay = {stay}");
        assert!((east - 0.25).abs() < 0.01, "east = {east}");
    }

    #[test]
    fn occupancy_conserves_trials() {
        let grid = Grid::new(3).unwrap();
        let walk = MetropolisWalk::new(
            grid,
            SteadyStateWeights::Uniform,
            grid.state(1).unwrap(),
            3,
        )
        .unwrap();
        let occ = metropolis_occupancy(&walk, &small_config(5)).unwrap();
        assert_eq!(occ.total(), 20_000);
        assert_eq!(occ.n_cells(), 9);
    }

    #[test]
    fn injected_rng_conserves_trials() {
        let grid = Grid::new(3).unwrap();
        let walk = MetropolisWalk::new(
            grid,
            SteadyStateWeights::Uniform,
            grid.state(5).unwrap(),
            4,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        let occ = metropolis_occupancy_with_rng(&walk, 5_000, &mut rng).unwrap();
        assert_eq!(occ.total(), 5_000);
    }

    #[test]
    fn bad_target_rejected_before_sampling() {
        let cfg = small_config(1);
        assert!(matches!(
            estimated_probability(1, 10, 9, 3, &cfg),
            Err(MetropolisError::Grid(GridError::IndexOutOfRange { index: 10, .. }))
        ));
    }

    #[test]
    fn bad_config_rejected() {
        let cfg = TrialConfig::new().with_iterations(0);
        assert_eq!(
            estimated_probability(1, 2, 9, 3, &cfg),
            Err(MetropolisError::MonteCarlo(MonteCarloError::ZeroIterations))
        );
    }

    #[test]
    fn seeded_estimates_repeat() {
        let ssp = [0.1, 0.1, 0.1, 0.2, 0.1, 0.2, 0.05, 0.05, 0.1];
        let a = bias_estimated_probability(1, 4, &ssp, 6, &small_config(21)).unwrap();
        let b = bias_estimated_probability(1, 4, &ssp, 6, &small_config(21)).unwrap();
        assert_eq!(a, b);
    }
}
