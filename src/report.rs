//! Report command: compute every configured quantity and print a summary.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use chainsim_ctmc::continuous_transition_probability;
use chainsim_metropolis::{
    bias_estimated_probability, bias_transition_probability, estimated_probability,
    transition_probability,
};
use chainsim_montecarlo::TrialConfig;
use chainsim_stats::binomial_standard_error;

use crate::cli::ReportArgs;
use crate::config::ChainsimConfig;
use crate::continuous_cmd::estimate_with;
use crate::convert;

/// One computed quantity.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub name: String,
    pub s1: usize,
    pub s2: usize,
    pub probability: f64,
    /// Binomial standard error; absent for exact values.
    pub standard_error: Option<f64>,
}

/// Everything the report computes.
#[derive(Debug, Serialize)]
pub struct Report {
    pub iterations: u64,
    pub chunks: usize,
    pub seed: Option<u64>,
    pub entries: Vec<Entry>,
    pub elapsed_seconds: f64,
}

impl Entry {
    fn exact(name: &str, s1: usize, s2: usize, probability: f64) -> Self {
        Self {
            name: name.to_string(),
            s1,
            s2,
            probability,
            standard_error: None,
        }
    }

    fn estimated(name: &str, s1: usize, s2: usize, probability: f64, iterations: u64) -> Self {
        Self {
            name: name.to_string(),
            s1,
            s2,
            probability,
            standard_error: Some(binomial_standard_error(probability, iterations)),
        }
    }
}

/// Run the report pipeline.
pub fn run(args: ReportArgs) -> Result<()> {
    let _cmd = info_span!("report").entered();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ChainsimConfig::default(),
    };
    let trials = convert::build_trial_config(&config.simulation, config.seed, &args.sim)?;

    let report = build_report(&config, &trials)?;
    print_report(&report);

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report).context("failed to serialise report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<ChainsimConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Computes every quantity in `config` with the trial settings `trials`.
pub fn build_report(config: &ChainsimConfig, trials: &TrialConfig) -> Result<Report> {
    let start = Instant::now();
    let n = trials.iterations();
    let mut entries = Vec::with_capacity(6);

    let t = &config.transition;
    let p = transition_probability(t.s1, t.s2, t.n_states).context("[transition]")?;
    entries.push(Entry::exact("transition", t.s1, t.s2, p));

    let e = &config.estimate;
    info!(steps = e.steps, iterations = n, "estimating grid walk");
    let p = estimated_probability(e.s1, e.s2, e.n_states, e.steps, trials).context("[estimate]")?;
    entries.push(Entry::estimated("estimate", e.s1, e.s2, p, n));

    let b = &config.bias;
    let p = bias_transition_probability(b.s1, b.s2, &b.ssp).context("[bias]")?;
    entries.push(Entry::exact("bias_transition", b.s1, b.s2, p));
    info!(steps = b.steps, iterations = n, "estimating weighted grid walk");
    let p = bias_estimated_probability(b.s1, b.s2, &b.ssp, b.steps, trials).context("[bias]")?;
    entries.push(Entry::estimated("bias_estimate", b.s1, b.s2, p, n));

    let c = &config.continuous;
    let p = continuous_transition_probability(c.s1, c.s2, &c.rates).context("[continuous]")?;
    entries.push(Entry::exact(
        "continuous_transition",
        c.s1.into(),
        c.s2.into(),
        p,
    ));

    let ce = &config.continuous_estimate;
    let observation = convert::parse_observation(&ce.observation)?;
    let p = estimate_with(ce.s1, ce.s2, &c.rates, ce.time, observation, trials)
        .context("[continuous_estimate]")?;
    entries.push(Entry::estimated(
        "continuous_estimate",
        ce.s1.into(),
        ce.s2.into(),
        p,
        n,
    ));

    Ok(Report {
        iterations: n,
        chunks: trials.n_chunks(),
        seed: trials.seed(),
        entries,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    })
}

fn print_report(report: &Report) {
    for e in &report.entries {
        match e.standard_error {
            Some(se) => println!(
                "{:<22} {} -> {}  {:.6} ± {:.1e}",
                e.name, e.s1, e.s2, e.probability, se
            ),
            None => println!(
                "{:<22} {} -> {}  {:.6}",
                e.name, e.s1, e.s2, e.probability
            ),
        }
    }
    println!(
        "{} iterations in {} chunks, {:.3} s",
        report.iterations, report.chunks, report.elapsed_seconds
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SimArgs;

    fn small_trials() -> TrialConfig {
        TrialConfig::new()
            .with_iterations(5_000)
            .with_seed(42)
            .with_chunks(4)
    }

    #[test]
    fn default_report_values() {
        let report = build_report(&ChainsimConfig::default(), &small_trials()).unwrap();
        assert_eq!(report.entries.len(), 6);

        let by_name = |name: &str| {
            report
                .entries
                .iter()
                .find(|e| e.name == name)
                .unwrap()
                .clone()
        };
        assert!((by_name("transition").probability - 0.25).abs() < 1e-12);
        assert!((by_name("continuous_transition").probability - 1.0 / 3.0).abs() < 1e-12);
        assert!(by_name("transition").standard_error.is_none());
        for name in ["estimate", "bias_estimate", "continuous_estimate"] {
            let e = by_name(name);
            assert!((0.0..=1.0).contains(&e.probability), "{name}");
            assert!(e.standard_error.is_some());
        }
        assert_eq!(report.seed, Some(42));
    }

    #[test]
    fn seeded_report_repeats() {
        let a = build_report(&ChainsimConfig::default(), &small_trials()).unwrap();
        let b = build_report(&ChainsimConfig::default(), &small_trials()).unwrap();
        let pa: Vec<f64> = a.entries.iter().map(|e| e.probability).collect();
        let pb: Vec<f64> = b.entries.iter().map(|e| e.probability).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn writes_json_from_toml_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("chainsim.toml");
        let output_path = dir.path().join("report.json");
        std::fs::write(
            &config_path,
            r#"
            seed = 5
            [simulation]
            iterations = 2000
            chunks = 2
            [continuous_estimate]
            observation = "at_target_time"
            time = 0.0
            "#,
        )
        .unwrap();

        run(ReportArgs {
            config: Some(config_path),
            output: Some(output_path.clone()),
            sim: SimArgs::default(),
        })
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
        assert_eq!(json["iterations"], 2000);
        assert_eq!(json["seed"], 5);
        let entries = json["entries"].as_array().unwrap();
        let ctmc = entries
            .iter()
            .find(|e| e["name"] == "continuous_estimate")
            .unwrap();
        // Zero target time: the chain is still in its start state 1, never in 3.
        assert_eq!(ctmc["probability"], 0.0);
    }

    #[test]
    fn bad_config_reports_context() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("bad.toml");
        std::fs::write(&config_path, "[transition]\ns1 = 0\n").unwrap();
        let err = run(ReportArgs {
            config: Some(config_path),
            output: None,
            sim: SimArgs {
                iterations: Some(100),
                ..SimArgs::default()
            },
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("[transition]"));
    }
}
