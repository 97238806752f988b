mod cli;
mod config;
mod continuous_cmd;
mod convert;
mod discrete_cmd;
mod logging;
mod report;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Transition(args) => discrete_cmd::transition(args),
        Command::Estimate(args) => discrete_cmd::estimate(args),
        Command::BiasTransition(args) => discrete_cmd::bias_transition(args),
        Command::BiasEstimate(args) => discrete_cmd::bias_estimate(args),
        Command::ContinuousTransition(args) => continuous_cmd::transition(args),
        Command::ContinuousEstimate(args) => continuous_cmd::estimate(args),
        Command::Report(args) => report::run(args),
    }
}
