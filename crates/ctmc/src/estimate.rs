//! Monte-Carlo estimates of where the chain is at a target time.

use chainsim_montecarlo::{Occupancy, TrialConfig, accumulate, run_trials};
use rand::Rng;
use tracing::debug;

use crate::error::CtmcError;
use crate::rates::RateTable;
use crate::simulate::{CtmcSimulation, Observation};
use crate::state::ChainState;

/// Runs `config.iterations()` independent trials of `sim` in seeded chunks.
///
/// Cell `i` of the result counts trials observed in the state with label
/// `i + 1`.
///
/// # Errors
///
/// Returns [`CtmcError::MonteCarlo`] if the config is invalid.
pub fn continuous_occupancy(
    sim: &CtmcSimulation,
    config: &TrialConfig,
) -> Result<Occupancy, CtmcError> {
    let occupancy = run_trials(config, ChainState::ALL.len(), |rng| sim.run_to_cell(rng))?;
    Ok(occupancy)
}

/// Runs `iterations` independent trials of `sim` against one random source.
///
/// # Errors
///
/// Returns [`CtmcError::MonteCarlo`] if the accumulator rejects a trial.
pub fn continuous_occupancy_with_rng<R: Rng + ?Sized>(
    sim: &CtmcSimulation,
    iterations: u64,
    rng: &mut R,
) -> Result<Occupancy, CtmcError> {
    let occupancy = accumulate(iterations, ChainState::ALL.len(), rng, |r| {
        sim.run_to_cell(r)
    })?;
    Ok(occupancy)
}

/// Estimates the probability that a chain started in `s1` is reported in `s2`
/// once its clock reaches `target_time`.
///
/// Each trial follows the reference observation rule
/// ([`Observation::AfterCrossingJump`]). The result is
/// `count[s2] / sum(counts)`; the standard error is roughly
/// `sqrt(p (1 - p) / iterations)`.
///
/// # Errors
///
/// Returns [`CtmcError`] if either label is not in `{1, 2, 3}`, the rate
/// table or target time is invalid, or the config is invalid.
pub fn continuous_estimated_probability(
    s1: u8,
    s2: u8,
    rates: &[f64],
    target_time: f64,
    config: &TrialConfig,
) -> Result<f64, CtmcError> {
    continuous_estimated_probability_with(
        s1,
        s2,
        rates,
        target_time,
        Observation::default(),
        config,
    )
}

/// [`continuous_estimated_probability`] under an explicit observation rule.
///
/// # Errors
///
/// Same as [`continuous_estimated_probability`].
#[tracing::instrument(skip(rates, config), fields(iterations = config.iterations()))]
pub fn continuous_estimated_probability_with(
    s1: u8,
    s2: u8,
    rates: &[f64],
    target_time: f64,
    observation: Observation,
    config: &TrialConfig,
) -> Result<f64, CtmcError> {
    let start = ChainState::try_from(s1)?;
    let target = ChainState::try_from(s2)?;
    let table = RateTable::from_slice(rates)?;
    let sim = CtmcSimulation::new(table, start, target_time)?.with_observation(observation);

    let occupancy = continuous_occupancy(&sim, config)?;
    let p = occupancy.proportion(target.as_index());
    debug!(
        hits = occupancy.count(target.as_index()),
        total = occupancy.total(),
        p,
        "occupancy estimate"
    );
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainsim_montecarlo::MonteCarloError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const RATES: [f64; 6] = [10.0, 20.0, 10.0, 1.0, 1.0, 1.0];

    fn small_config(seed: u64) -> TrialConfig {
        TrialConfig::new()
            .with_iterations(20_000)
            .with_seed(seed)
            .with_chunks(8)
    }

    #[test]
    fn zero_time_is_a_point_mass() {
        let cfg = small_config(1);
        assert_eq!(continuous_estimated_probability(2, 2, &RATES, 0.0, &cfg).unwrap(), 1.0);
        assert_eq!(continuous_estimated_probability(2, 3, &RATES, 0.0, &cfg).unwrap(), 0.0);
    }

    #[test]
    fn estimates_over_states_sum_to_one() {
        let cfg = small_config(2);
        let total: f64 = (1..=3)
            .map(|s2| continuous_estimated_probability(1, s2, &RATES, 0.07, &cfg).unwrap())
            .sum();
        assert!((total - 1.0).abs() < 1e-12, "total = {total}");
    }

    #[test]
    fn occupancy_conserves_trials() {
        let sim = CtmcSimulation::new(RateTable::new(RATES).unwrap(), ChainState::One, 0.3)
            .unwrap()
            .with_observation(Observation::AtTargetTime);
        let occ = continuous_occupancy(&sim, &small_config(3)).unwrap();
        assert_eq!(occ.total(), 20_000);
        assert_eq!(occ.n_cells(), 3);

        let mut rng = StdRng::seed_from_u64(4);
        let occ = continuous_occupancy_with_rng(&sim, 1_234, &mut rng).unwrap();
        assert_eq!(occ.total(), 1_234);
    }

    #[test]
    fn observation_rule_is_forwarded() {
        // At zero target time both rules report the start state.
        let cfg = small_config(6);
        for observation in [Observation::AfterCrossingJump, Observation::AtTargetTime] {
            let p = continuous_estimated_probability_with(3, 3, &RATES, 0.0, observation, &cfg);
            assert_eq!(p.unwrap(), 1.0);
        }

        // For a tiny positive time the default rule always leaves the start
        // state, while the at-target-time rule almost always stays.
        let leave = continuous_estimated_probability_with(
            1,
            1,
            &RATES,
            1e-9,
            Observation::AfterCrossingJump,
            &cfg,
        )
        .unwrap();
        let at = Observation::AtTargetTime;
        let stay = continuous_estimated_probability_with(1, 1, &RATES, 1e-9, at, &cfg).unwrap();
        assert_eq!(leave, 0.0);
        assert!(stay > 0.99, "stay = {stay}");
        assert_eq!(
            continuous_estimated_probability(1, 1, &RATES, 1e-9, &cfg).unwrap(),
            leave
        );
    }

    #[test]
    fn invalid_inputs_rejected() {
        let cfg = small_config(1);
        assert_eq!(
            continuous_estimated_probability(0, 1, &RATES, 1.0, &cfg),
            Err(CtmcError::InvalidStateLabel { label: 0 })
        );
        assert_eq!(
            continuous_estimated_probability(1, 4, &RATES, 1.0, &cfg),
            Err(CtmcError::InvalidStateLabel { label: 4 })
        );
        assert!(matches!(
            continuous_estimated_probability(1, 2, &RATES, -1.0, &cfg),
            Err(CtmcError::InvalidTargetTime { .. })
        ));
        assert_eq!(
            continuous_estimated_probability(1, 2, &RATES, 1.0, &TrialConfig::new().with_chunks(0)),
            Err(CtmcError::MonteCarlo(MonteCarloError::ZeroChunks))
        );
    }
}
