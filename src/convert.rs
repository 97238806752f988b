//! Pure conversion functions: TOML config structs and CLI overrides -> crate API config types.

use anyhow::{Result, bail};

use chainsim_ctmc::Observation;
use chainsim_montecarlo::TrialConfig;

use crate::cli::SimArgs;
use crate::config::SimulationToml;

/// Parses an observation rule name into the corresponding enum variant.
pub fn parse_observation(s: &str) -> Result<Observation> {
    match s.to_lowercase().replace('-', "_").as_str() {
        "after_crossing_jump" => Ok(Observation::AfterCrossingJump),
        "at_target_time" => Ok(Observation::AtTargetTime),
        other => bail!("unknown observation rule: {other:?}"),
    }
}

/// Builds a [`TrialConfig`] from the TOML simulation section, with any CLI
/// flag taking precedence over its config value.
pub fn build_trial_config(
    sim: &SimulationToml,
    seed: Option<u64>,
    overrides: &SimArgs,
) -> Result<TrialConfig> {
    let cfg = TrialConfig::new()
        .with_iterations(overrides.iterations.unwrap_or(sim.iterations))
        .with_optional_seed(overrides.seed.or(seed))
        .with_chunks(overrides.chunks.unwrap_or(sim.chunks));
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`TrialConfig`] from CLI flags alone, falling back to the
/// library defaults.
pub fn trial_config_from_args(args: &SimArgs) -> Result<TrialConfig> {
    build_trial_config(&SimulationToml::default(), None, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainsim_montecarlo::{DEFAULT_CHUNKS, DEFAULT_ITERATIONS};

    #[test]
    fn observation_names() {
        assert_eq!(
            parse_observation("after_crossing_jump").unwrap(),
            Observation::AfterCrossingJump
        );
        assert_eq!(
            parse_observation("At-Target-Time").unwrap(),
            Observation::AtTargetTime
        );
        assert!(parse_observation("midpoint").is_err());
    }

    #[test]
    fn cli_flags_override_config() {
        let sim = SimulationToml {
            iterations: 500,
            chunks: 4,
        };
        let args = SimArgs {
            iterations: Some(900),
            seed: Some(3),
            chunks: None,
        };
        let cfg = build_trial_config(&sim, Some(1), &args).unwrap();
        assert_eq!(cfg.iterations(), 900);
        assert_eq!(cfg.seed(), Some(3));
        assert_eq!(cfg.n_chunks(), 4);
    }

    #[test]
    fn config_seed_used_without_flag() {
        let cfg = build_trial_config(&SimulationToml::default(), Some(11), &SimArgs::default())
            .unwrap();
        assert_eq!(cfg.seed(), Some(11));
        assert_eq!(cfg.iterations(), DEFAULT_ITERATIONS);
        assert_eq!(cfg.n_chunks(), DEFAULT_CHUNKS);
    }

    #[test]
    fn invalid_overrides_rejected() {
        let args = SimArgs {
            iterations: Some(0),
            ..SimArgs::default()
        };
        assert!(trial_config_from_args(&args).is_err());
        let args = SimArgs {
            chunks: Some(0),
            ..SimArgs::default()
        };
        assert!(trial_config_from_args(&args).is_err());
    }
}
