//! Grid-walk commands: exact one-step probabilities and Monte-Carlo estimates.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chainsim_metropolis::{
    bias_estimated_probability, bias_transition_probability, estimated_probability,
    transition_probability,
};
use chainsim_stats::binomial_standard_error;

use crate::cli::{BiasEstimateArgs, BiasTransitionArgs, EstimateArgs, TransitionArgs};
use crate::convert;

/// Print the uniform-weight one-step probability.
pub fn transition(args: TransitionArgs) -> Result<()> {
    let p = transition_probability(args.s1, args.s2, args.states).with_context(|| {
        format!(
            "transition {} -> {} on {} states",
            args.s1, args.s2, args.states
        )
    })?;
    println!("{p}");
    Ok(())
}

/// Print the uniform-weight walk estimate.
pub fn estimate(args: EstimateArgs) -> Result<()> {
    let _cmd = info_span!("estimate").entered();
    let trials = convert::trial_config_from_args(&args.sim)?;
    info!(
        s1 = args.s1,
        s2 = args.s2,
        steps = args.steps,
        iterations = trials.iterations(),
        "running grid walk"
    );
    let p = estimated_probability(args.s1, args.s2, args.states, args.steps, &trials)
        .context("grid walk estimate failed")?;
    print_estimate(p, trials.iterations());
    Ok(())
}

/// Print the weighted 3x3 one-step probability.
pub fn bias_transition(args: BiasTransitionArgs) -> Result<()> {
    let p = bias_transition_probability(args.s1, args.s2, &args.ssp)
        .with_context(|| format!("weighted transition {} -> {}", args.s1, args.s2))?;
    println!("{p}");
    Ok(())
}

/// Print the weighted 3x3 walk estimate.
pub fn bias_estimate(args: BiasEstimateArgs) -> Result<()> {
    let _cmd = info_span!("bias_estimate").entered();
    let trials = convert::trial_config_from_args(&args.sim)?;
    info!(
        s1 = args.s1,
        s2 = args.s2,
        steps = args.steps,
        iterations = trials.iterations(),
        "running weighted grid walk"
    );
    let p = bias_estimated_probability(args.s1, args.s2, &args.ssp, args.steps, &trials)
        .context("weighted grid walk estimate failed")?;
    print_estimate(p, trials.iterations());
    Ok(())
}

pub(crate) fn print_estimate(p: f64, iterations: u64) {
    println!("{p} ± {:.2e}", binomial_standard_error(p, iterations));
}
