//! Monte-Carlo trial running for occupancy estimation.
//!
//! A *trial* is any closure that consumes randomness and returns the cell it
//! finished in. Runners repeat trials, count where each one ended in an
//! [`Occupancy`], and hand the counts back for conversion into empirical
//! probabilities.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────────┐     ┌──────────────┐
//!  │ TrialConfig   │────▶│  run_trials        │────▶│  Occupancy    │
//!  │ (iter, seed)  │     │  (chunks on rayon) │     │  (merge)      │
//!  └──────────────┘     └────────────────────┘     └──────────────┘
//! ```
//!
//! Chunk seeds are drawn from a master generator in a fixed order, so for a
//! given `(seed, iterations, n_chunks)` the merged counts are identical no
//! matter how many worker threads execute the chunks.
//!
//! # Quick start
//!
//! ```rust
//! use chainsim_montecarlo::{TrialConfig, run_trials};
//! use rand::Rng;
//!
//! let config = TrialConfig::new().with_iterations(1_000).with_seed(7);
//! let occupancy = run_trials(&config, 2, |rng| usize::from(rng.random_bool(0.5))).unwrap();
//!
//! assert_eq!(occupancy.total(), 1_000);
//! ```

pub mod config;
pub mod error;
pub mod occupancy;
pub mod runner;

pub use config::{DEFAULT_CHUNKS, DEFAULT_ITERATIONS, TrialConfig};
pub use error::MonteCarloError;
pub use occupancy::Occupancy;
pub use runner::{accumulate, run_trials};
