//! Sequential and chunked-parallel trial runners.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::config::TrialConfig;
use crate::error::MonteCarloError;
use crate::occupancy::Occupancy;

/// Runs `iterations` trials against a single injected random source.
///
/// Each call of `trial` is one independent trial; the cell it returns is
/// counted once the trial has finished.
///
/// # Arguments
///
/// * `iterations` - Number of trials to run (zero yields an empty accumulator).
/// * `n_cells` - Number of cells the trials can end in.
/// * `rng` - Random number generator shared by all trials.
/// * `trial` - Runs one trial and returns its final cell.
///
/// # Errors
///
/// Returns [`MonteCarloError::NoCells`] if `n_cells` is zero, or
/// [`MonteCarloError::CellOutOfRange`] if a trial reports an untracked cell.
pub fn accumulate<R, F>(
    iterations: u64,
    n_cells: usize,
    rng: &mut R,
    mut trial: F,
) -> Result<Occupancy, MonteCarloError>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> usize,
{
    let mut occupancy = Occupancy::new(n_cells)?;
    for _ in 0..iterations {
        let cell = trial(rng);
        occupancy.record(cell)?;
    }
    Ok(occupancy)
}

/// Runs the configured number of trials in independently seeded chunks.
///
/// A master [`StdRng`] (seeded from the config, or from the OS when no seed
/// is set) draws one seed per chunk in chunk order. Chunks then execute on
/// the rayon pool, each with a private accumulator, and the partial counts are
/// merged. The result depends only on the seed, iteration count and chunk
/// count.
///
/// # Errors
///
/// Returns an error if the config is invalid, `n_cells` is zero, or a trial
/// reports an untracked cell.
pub fn run_trials<F>(
    config: &TrialConfig,
    n_cells: usize,
    trial: F,
) -> Result<Occupancy, MonteCarloError>
where
    F: Fn(&mut StdRng) -> usize + Sync,
{
    config.validate()?;

    let mut master = match config.seed() {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let plan: Vec<(u64, u64)> = config
        .chunk_lengths()
        .into_iter()
        .map(|len| (master.random::<u64>(), len))
        .collect();

    let partials = plan
        .into_par_iter()
        .map(|(seed, len)| {
            let mut rng = StdRng::seed_from_u64(seed);
            accumulate(len, n_cells, &mut rng, &trial)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut occupancy = Occupancy::new(n_cells)?;
    for partial in &partials {
        occupancy.merge(partial)?;
    }

    debug!(
        iterations = config.iterations(),
        n_chunks = config.effective_chunks(),
        n_cells,
        "trials complete"
    );
    Ok(occupancy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_counts_every_trial() {
        let mut rng = StdRng::seed_from_u64(1);
        let occ = accumulate(1_000, 4, &mut rng, |r| r.random_range(0..4)).unwrap();
        assert_eq!(occ.total(), 1_000);
    }

    #[test]
    fn accumulate_zero_iterations() {
        let mut rng = StdRng::seed_from_u64(1);
        let occ = accumulate(0, 4, &mut rng, |_| 0).unwrap();
        assert_eq!(occ.total(), 0);
    }

    #[test]
    fn accumulate_reports_bad_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = accumulate(10, 2, &mut rng, |_| 5);
        assert_eq!(
            result,
            Err(MonteCarloError::CellOutOfRange {
                cell: 5,
                n_cells: 2
            })
        );
    }

    #[test]
    fn run_trials_conserves_iterations() {
        let cfg = TrialConfig::new()
            .with_iterations(12_345)
            .with_seed(3)
            .with_chunks(7);
        let occ = run_trials(&cfg, 3, |r| r.random_range(0..3)).unwrap();
        assert_eq!(occ.total(), 12_345);
    }

    #[test]
    fn run_trials_deterministic_with_seed() {
        let cfg = TrialConfig::new()
            .with_iterations(5_000)
            .with_seed(11)
            .with_chunks(8);
        let a = run_trials(&cfg, 5, |r| r.random_range(0..5)).unwrap();
        let b = run_trials(&cfg, 5, |r| r.random_range(0..5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn run_trials_caps_oversized_chunk_count() {
        let cfg = TrialConfig::new()
            .with_iterations(10)
            .with_seed(4)
            .with_chunks(usize::MAX);
        let occ = run_trials(&cfg, 3, |_| 0).unwrap();
        assert_eq!(occ.total(), 10);
        assert_eq!(occ.count(0), 10);
    }

    #[test]
    fn run_trials_rejects_invalid_config() {
        let cfg = TrialConfig::new().with_iterations(0);
        assert_eq!(
            run_trials(&cfg, 3, |_| 0),
            Err(MonteCarloError::ZeroIterations)
        );
    }

    #[test]
    fn run_trials_propagates_bad_cell() {
        let cfg = TrialConfig::new().with_iterations(100).with_seed(0);
        assert!(matches!(
            run_trials(&cfg, 2, |_| 2),
            Err(MonteCarloError::CellOutOfRange { cell: 2, .. })
        ));
    }
}
