//! CTMC commands: embedded-chain jump probabilities and Monte-Carlo estimates.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chainsim_ctmc::{
    Observation, continuous_estimated_probability_with, continuous_transition_probability,
};
use chainsim_montecarlo::TrialConfig;

use crate::cli::{ContinuousEstimateArgs, ContinuousTransitionArgs};
use crate::convert;
use crate::discrete_cmd::print_estimate;

/// Print the embedded-chain jump probability.
pub fn transition(args: ContinuousTransitionArgs) -> Result<()> {
    let p = continuous_transition_probability(args.s1, args.s2, &args.rates)
        .with_context(|| format!("jump probability {} -> {}", args.s1, args.s2))?;
    println!("{p}");
    Ok(())
}

/// Print the estimate of the state observed at the target time.
pub fn estimate(args: ContinuousEstimateArgs) -> Result<()> {
    let _cmd = info_span!("continuous_estimate").entered();
    let trials = convert::trial_config_from_args(&args.sim)?;
    let observation = if args.at_target_time {
        Observation::AtTargetTime
    } else {
        Observation::AfterCrossingJump
    };
    let p = estimate_with(
        args.s1,
        args.s2,
        &args.rates,
        args.time,
        observation,
        &trials,
    )?;
    print_estimate(p, trials.iterations());
    Ok(())
}

/// Runs the CTMC estimate under an explicit observation rule.
pub(crate) fn estimate_with(
    s1: u8,
    s2: u8,
    rates: &[f64],
    time: f64,
    observation: Observation,
    trials: &TrialConfig,
) -> Result<f64> {
    info!(
        s1,
        s2,
        time,
        ?observation,
        iterations = trials.iterations(),
        "running CTMC trials"
    );
    continuous_estimated_probability_with(s1, s2, rates, time, observation, trials)
        .context("CTMC estimate failed")
}
