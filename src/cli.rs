use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Monte-Carlo estimates of Markov chain transition probabilities.
#[derive(Parser)]
#[command(
    name = "chainsim",
    version,
    about = "Monte-Carlo estimates of Markov chain transition probabilities"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Exact one-step probability of the uniform-weight grid walk.
    Transition(TransitionArgs),
    /// Monte-Carlo estimate of the uniform-weight grid walk after N steps.
    Estimate(EstimateArgs),
    /// Exact one-step probability of the 3x3 walk with a weight table.
    BiasTransition(BiasTransitionArgs),
    /// Monte-Carlo estimate of the 3x3 walk with a weight table after N steps.
    BiasEstimate(BiasEstimateArgs),
    /// Embedded-chain jump probability of the three-state CTMC.
    ContinuousTransition(ContinuousTransitionArgs),
    /// Monte-Carlo estimate of the three-state CTMC at a target time.
    ContinuousEstimate(ContinuousEstimateArgs),
    /// Compute every quantity from a TOML config and print a report.
    Report(ReportArgs),
}

/// Overrides for the Monte-Carlo trial settings.
#[derive(clap::Args, Default)]
pub struct SimArgs {
    /// Number of independent trials.
    #[arg(short = 'n', long)]
    pub iterations: Option<u64>,

    /// RNG seed; unseeded runs draw from OS entropy.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of seeded chunks the trials are split into.
    #[arg(long)]
    pub chunks: Option<usize>,
}

/// Arguments for the `transition` subcommand.
#[derive(clap::Args)]
pub struct TransitionArgs {
    /// Source state (1-based, row-major).
    #[arg(long)]
    pub s1: usize,

    /// Destination state (1-based, row-major).
    #[arg(long)]
    pub s2: usize,

    /// Number of states; the grid is floor(sqrt(states)) wide.
    #[arg(long, default_value_t = 9)]
    pub states: usize,
}

/// Arguments for the `estimate` subcommand.
#[derive(clap::Args)]
pub struct EstimateArgs {
    /// Start state (1-based, row-major).
    #[arg(long)]
    pub s1: usize,

    /// State whose occupancy is estimated.
    #[arg(long)]
    pub s2: usize,

    /// Number of states; the grid is floor(sqrt(states)) wide.
    #[arg(long, default_value_t = 9)]
    pub states: usize,

    /// Proposals made per trial.
    #[arg(long, default_value_t = 3)]
    pub steps: usize,

    #[command(flatten)]
    pub sim: SimArgs,
}

/// Arguments for the `bias-transition` subcommand.
#[derive(clap::Args)]
pub struct BiasTransitionArgs {
    /// Source state in `1..=9`.
    #[arg(long)]
    pub s1: usize,

    /// Destination state in `1..=9`.
    #[arg(long)]
    pub s2: usize,

    /// Nine comma-separated steady-state weights, indexed by state - 1.
    #[arg(long, value_delimiter = ',', required = true)]
    pub ssp: Vec<f64>,
}

/// Arguments for the `bias-estimate` subcommand.
#[derive(clap::Args)]
pub struct BiasEstimateArgs {
    /// Start state in `1..=9`.
    #[arg(long)]
    pub s1: usize,

    /// State whose occupancy is estimated.
    #[arg(long)]
    pub s2: usize,

    /// Nine comma-separated steady-state weights, indexed by state - 1.
    #[arg(long, value_delimiter = ',', required = true)]
    pub ssp: Vec<f64>,

    /// Proposals made per trial.
    #[arg(long, default_value_t = 3)]
    pub steps: usize,

    #[command(flatten)]
    pub sim: SimArgs,
}

/// Arguments for the `continuous-transition` subcommand.
#[derive(clap::Args)]
pub struct ContinuousTransitionArgs {
    /// Source state in `1..=3`.
    #[arg(long)]
    pub s1: u8,

    /// Destination state in `1..=3`.
    #[arg(long)]
    pub s2: u8,

    /// Six comma-separated rates ordered 1→2, 1→3, 2→1, 2→3, 3→1, 3→2.
    #[arg(long, value_delimiter = ',', required = true)]
    pub rates: Vec<f64>,
}

/// Arguments for the `continuous-estimate` subcommand.
#[derive(clap::Args)]
pub struct ContinuousEstimateArgs {
    /// Start state in `1..=3`.
    #[arg(long)]
    pub s1: u8,

    /// State whose occupancy is estimated.
    #[arg(long)]
    pub s2: u8,

    /// Six comma-separated rates ordered 1→2, 1→3, 2→1, 2→3, 3→1, 3→2.
    #[arg(long, value_delimiter = ',', required = true)]
    pub rates: Vec<f64>,

    /// Target time of every trial.
    #[arg(short, long)]
    pub time: f64,

    /// Report the state held at the target time instead of the state
    /// entered by the jump that crosses it.
    #[arg(long)]
    pub at_target_time: bool,

    #[command(flatten)]
    pub sim: SimArgs,
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to TOML configuration file; built-in defaults are used if absent.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the report as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub sim: SimArgs,
}
