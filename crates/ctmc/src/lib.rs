//! Three-state continuous-time Markov chain.
//!
//! The chain is described by six transition rates in the fixed order
//! `[1→2, 1→3, 2→1, 2→3, 3→1, 3→2]`. A state is held for an exponential time
//! with rate equal to its *propensity* (the sum of its two outgoing rates) and
//! then jumps to one of the other two states with probability proportional to
//! the corresponding rate.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  RateTable    │────▶│  transition    │────▶│    simulate      │
//!  │  (validate)   │     │  (jump probs)  │     │  (Gillespie SSA) │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use chainsim_ctmc::continuous_transition_probability;
//!
//! let rates = [10.0, 20.0, 10.0, 1.0, 1.0, 1.0];
//! let p = continuous_transition_probability(1, 2, &rates).unwrap();
//! assert!((p - 1.0 / 3.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod estimate;
pub mod rates;
pub mod simulate;
pub mod state;
pub mod stationary;
pub mod transition;

pub use error::CtmcError;
pub use estimate::{
    continuous_estimated_probability, continuous_estimated_probability_with,
    continuous_occupancy, continuous_occupancy_with_rng,
};
pub use rates::RateTable;
pub use simulate::{CtmcSimulation, Observation, Trajectory, waiting_time};
pub use state::ChainState;
pub use stationary::stationary_distribution;
pub use transition::{continuous_transition_probability, jump_probability, sample_next_state};
