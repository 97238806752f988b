//! Gillespie-style simulation of single trials.

use rand::Rng;

use crate::error::CtmcError;
use crate::rates::RateTable;
use crate::state::ChainState;
use crate::transition::sample_next_state;

/// Draws an exponential holding time with rate `propensity` by inverting the
/// CDF: `-ln(r) / propensity` with `r` uniform on `(0, 1]`.
///
/// Returns infinity for a non-positive propensity (the state is absorbing).
pub fn waiting_time<R: Rng + ?Sized>(propensity: f64, rng: &mut R) -> f64 {
    if propensity <= 0.0 {
        return f64::INFINITY;
    }
    let r: f64 = 1.0 - rng.random::<f64>();
    -(1.0 / propensity) * r.ln()
}

/// Which state a trial reports once its clock reaches the target time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Observation {
    /// The state entered by the jump that carries the clock to or past the
    /// target time. At large target times this converges to `pi P`, the
    /// stationary distribution pushed through one embedded-chain step.
    #[default]
    AfterCrossingJump,
    /// The state occupied at the target time itself. Converges to the
    /// time-stationary distribution `pi`.
    AtTargetTime,
}

/// Jump times and states of one simulated trial, starting with `(0, start)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<ChainState>,
}

impl Trajectory {
    /// Times of the initial state and of every jump, non-decreasing.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Initial state followed by the state entered at each jump.
    pub fn states(&self) -> &[ChainState] {
        &self.states
    }

    /// Number of jumps made.
    pub fn n_jumps(&self) -> usize {
        self.states.len() - 1
    }

    /// The state the trial reports.
    pub fn final_state(&self) -> ChainState {
        self.states[self.states.len() - 1]
    }
}

/// One trial setup: a rate table, a start state and a target time.
#[derive(Debug, Clone, PartialEq)]
pub struct CtmcSimulation {
    rates: RateTable,
    start: ChainState,
    target_time: f64,
    observation: Observation,
}

impl CtmcSimulation {
    /// Creates a simulation observed with [`Observation::AfterCrossingJump`].
    ///
    /// # Errors
    ///
    /// Returns [`CtmcError::InvalidTargetTime`] if `target_time` is negative
    /// or non-finite.
    pub fn new(
        rates: RateTable,
        start: ChainState,
        target_time: f64,
    ) -> Result<Self, CtmcError> {
        if !target_time.is_finite() || target_time < 0.0 {
            return Err(CtmcError::InvalidTargetTime { value: target_time });
        }
        Ok(Self {
            rates,
            start,
            target_time,
            observation: Observation::default(),
        })
    }

    /// Sets which state a trial reports.
    pub fn with_observation(mut self, observation: Observation) -> Self {
        self.observation = observation;
        self
    }

    /// The rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Start state of every trial.
    pub fn start(&self) -> ChainState {
        self.start
    }

    /// Target time of every trial.
    pub fn target_time(&self) -> f64 {
        self.target_time
    }

    /// Observation policy.
    pub fn observation(&self) -> Observation {
        self.observation
    }

    fn run_with<R, F>(&self, rng: &mut R, mut on_jump: F) -> ChainState
    where
        R: Rng + ?Sized,
        F: FnMut(f64, ChainState),
    {
        let mut time = 0.0;
        let mut current = self.start;
        while time < self.target_time {
            let propensity = self.rates.propensity(current);
            if propensity <= 0.0 {
                break;
            }
            let dt = waiting_time(propensity, rng);
            if self.observation == Observation::AtTargetTime && time + dt >= self.target_time {
                break;
            }
            time += dt;
            current = sample_next_state(&self.rates, current, rng);
            on_jump(time, current);
        }
        current
    }

    /// Runs one trial and returns the observed state.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> ChainState {
        self.run_with(rng, |_, _| {})
    }

    /// Runs one trial and returns the zero-based index of the observed state.
    pub fn run_to_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.run(rng).as_index()
    }

    /// Runs one trial and records every jump.
    ///
    /// Consumes randomness exactly like [`CtmcSimulation::run`], so the same
    /// seed yields the same final state.
    pub fn run_path<R: Rng + ?Sized>(&self, rng: &mut R) -> Trajectory {
        let mut times = vec![0.0];
        let mut states = vec![self.start];
        self.run_with(rng, |t, s| {
            times.push(t);
            states.push(s);
        });
        Trajectory { times, states }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const RATES: [f64; 6] = [10.0, 20.0, 10.0, 1.0, 1.0, 1.0];

    fn sim(target: f64) -> CtmcSimulation {
        CtmcSimulation::new(RateTable::new(RATES).unwrap(), ChainState::One, target).unwrap()
    }

    #[test]
    fn waiting_time_mean_matches_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 50_000;
        let mean = (0..n).map(|_| waiting_time(4.0, &mut rng)).sum::<f64>() / n as f64;
        assert!((mean - 0.25).abs() < 0.01, "mean = {mean}");
    }

    #[test]
    fn waiting_time_is_positive_and_finite() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let w = waiting_time(30.0, &mut rng);
            assert!(w.is_finite() && w >= 0.0);
        }
        assert_eq!(waiting_time(0.0, &mut rng), f64::INFINITY);
    }

    #[test]
    fn invalid_target_time_rejected() {
        let rates = RateTable::new(RATES).unwrap();
        for t in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                CtmcSimulation::new(rates, ChainState::One, t),
                Err(CtmcError::InvalidTargetTime { .. })
            ));
        }
    }

    #[test]
    fn zero_target_time_reports_start() {
        let mut rng = StdRng::seed_from_u64(0);
        let s = sim(0.0);
        for _ in 0..100 {
            assert_eq!(s.run(&mut rng), ChainState::One);
        }
        assert_eq!(s.run_path(&mut rng).n_jumps(), 0);
    }

    #[test]
    fn crossing_jump_always_leaves_start_for_positive_time() {
        // With the default observation at least one jump always happens.
        let mut rng = StdRng::seed_from_u64(8);
        let s = sim(1e-9);
        for _ in 0..200 {
            assert_ne!(s.run(&mut rng), ChainState::One);
        }
    }

    #[test]
    fn at_target_time_usually_stays_for_tiny_time() {
        let mut rng = StdRng::seed_from_u64(8);
        let s = sim(1e-9).with_observation(Observation::AtTargetTime);
        for _ in 0..200 {
            assert_eq!(s.run(&mut rng), ChainState::One);
        }
    }

    #[test]
    fn absorbing_state_ends_trial() {
        let rates = RateTable::new([1.0, 1.0, 1.0, 1.0, 0.0, 0.0]).unwrap();
        let s = CtmcSimulation::new(rates, ChainState::Three, 10.0).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let path = s.run_path(&mut rng);
        assert_eq!(path.n_jumps(), 0);
        assert_eq!(path.final_state(), ChainState::Three);
    }

    #[test]
    fn path_is_consistent() {
        let s = sim(2.0);
        let mut rng = StdRng::seed_from_u64(77);
        let path = s.run_path(&mut rng);
        assert!(path.n_jumps() > 0);
        assert_eq!(path.states()[0], ChainState::One);
        assert!(path.times().windows(2).all(|w| w[1] >= w[0]));
        assert!(path.states().windows(2).all(|w| w[0] != w[1]));
        assert!(*path.times().last().unwrap() >= 2.0);
        assert!(path.times()[path.n_jumps() - 1] < 2.0);
    }

    #[test]
    fn path_and_run_agree_under_same_seed() {
        let s = sim(0.5);
        let mut rng1 = StdRng::seed_from_u64(31);
        let mut rng2 = StdRng::seed_from_u64(31);
        for _ in 0..100 {
            assert_eq!(s.run(&mut rng1), s.run_path(&mut rng2).final_state());
        }
    }
}
