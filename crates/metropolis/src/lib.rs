//! Metropolis random walk on a square grid.
//!
//! The walker proposes one of the four nearest-neighbour moves with equal
//! probability and accepts it with probability
//! `min(1, w(candidate) / w(current))`, where `w` is a
//! [`SteadyStateWeights`](chainsim_grid::SteadyStateWeights) source. Off-grid
//! candidates have weight zero and are always rejected.
//!
//! Two kinds of answer are provided:
//!
//! * **analytic** one-step transition probabilities
//!   ([`transition_probability`], [`bias_transition_probability`]), and
//! * **Monte-Carlo** estimates of where the walker sits after a fixed number
//!   of proposals ([`estimated_probability`], [`bias_estimated_probability`]).
//!
//! # Quick start
//!
//! ```rust
//! use chainsim_metropolis::transition_probability;
//!
//! // Corner state 1 of a 3x3 grid: two of four proposals leave the grid.
//! let stay = transition_probability(1, 1, 9).unwrap();
//! assert!((stay - 0.5).abs() < 1e-12);
//! ```

pub mod acceptance;
pub mod error;
pub mod estimate;
pub mod sampler;
pub mod transition;

pub use acceptance::{PROPOSE_PROBABILITY, acceptance_probability};
pub use error::MetropolisError;
pub use estimate::{
    bias_estimated_probability, estimated_probability, metropolis_occupancy,
    metropolis_occupancy_with_rng,
};
pub use sampler::MetropolisWalk;
pub use transition::{
    BIAS_GRID_SIZE, DirectionalProbabilities, bias_transition_probability,
    transition_probability,
};
