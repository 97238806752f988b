use serde::Deserialize;

use chainsim_montecarlo::{DEFAULT_CHUNKS, DEFAULT_ITERATIONS};

/// Top-level chainsim configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ChainsimConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Monte-Carlo trial settings.
    #[serde(default)]
    pub simulation: SimulationToml,

    /// Uniform-weight one-step probability.
    #[serde(default)]
    pub transition: TransitionToml,

    /// Uniform-weight walk estimate.
    #[serde(default)]
    pub estimate: EstimateToml,

    /// Weighted 3x3 walk.
    #[serde(default)]
    pub bias: BiasToml,

    /// CTMC jump probability and rate table.
    #[serde(default)]
    pub continuous: ContinuousToml,

    /// CTMC estimate at a target time.
    #[serde(default)]
    pub continuous_estimate: ContinuousEstimateToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationToml {
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    #[serde(default = "default_chunks")]
    pub chunks: usize,
}

impl Default for SimulationToml {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            chunks: default_chunks(),
        }
    }
}

fn default_iterations() -> u64 {
    DEFAULT_ITERATIONS
}
fn default_chunks() -> usize {
    DEFAULT_CHUNKS
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionToml {
    #[serde(default = "default_s1")]
    pub s1: usize,
    #[serde(default = "default_s2")]
    pub s2: usize,
    #[serde(default = "default_n_states")]
    pub n_states: usize,
}

impl Default for TransitionToml {
    fn default() -> Self {
        Self {
            s1: default_s1(),
            s2: default_s2(),
            n_states: default_n_states(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimateToml {
    #[serde(default = "default_s1")]
    pub s1: usize,
    #[serde(default = "default_s2")]
    pub s2: usize,
    #[serde(default = "default_n_states")]
    pub n_states: usize,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl Default for EstimateToml {
    fn default() -> Self {
        Self {
            s1: default_s1(),
            s2: default_s2(),
            n_states: default_n_states(),
            steps: default_steps(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BiasToml {
    #[serde(default = "default_s1")]
    pub s1: usize,
    #[serde(default = "default_s2")]
    pub s2: usize,
    #[serde(default = "default_ssp")]
    pub ssp: Vec<f64>,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl Default for BiasToml {
    fn default() -> Self {
        Self {
            s1: default_s1(),
            s2: default_s2(),
            ssp: default_ssp(),
            steps: default_steps(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContinuousToml {
    #[serde(default = "default_ctmc_s1")]
    pub s1: u8,
    #[serde(default = "default_ctmc_s2")]
    pub s2: u8,
    #[serde(default = "default_rates")]
    pub rates: Vec<f64>,
}

impl Default for ContinuousToml {
    fn default() -> Self {
        Self {
            s1: default_ctmc_s1(),
            s2: default_ctmc_s2(),
            rates: default_rates(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContinuousEstimateToml {
    #[serde(default = "default_ctmc_s1")]
    pub s1: u8,
    #[serde(default = "default_ctmc_estimate_s2")]
    pub s2: u8,
    #[serde(default = "default_time")]
    pub time: f64,
    /// `"after_crossing_jump"` or `"at_target_time"`.
    #[serde(default = "default_observation")]
    pub observation: String,
}

impl Default for ContinuousEstimateToml {
    fn default() -> Self {
        Self {
            s1: default_ctmc_s1(),
            s2: default_ctmc_estimate_s2(),
            time: default_time(),
            observation: default_observation(),
        }
    }
}

fn default_s1() -> usize {
    1
}
fn default_s2() -> usize {
    2
}
fn default_n_states() -> usize {
    9
}
fn default_steps() -> usize {
    3
}
fn default_ssp() -> Vec<f64> {
    vec![0.1, 0.1, 0.1, 0.2, 0.1, 0.2, 0.05, 0.05, 0.1]
}
fn default_ctmc_s1() -> u8 {
    1
}
fn default_ctmc_s2() -> u8 {
    2
}
fn default_ctmc_estimate_s2() -> u8 {
    3
}
fn default_rates() -> Vec<f64> {
    vec![10.0, 20.0, 10.0, 1.0, 1.0, 1.0]
}
fn default_time() -> f64 {
    0.07
}
fn default_observation() -> String {
    "after_crossing_jump".to_string()
}
