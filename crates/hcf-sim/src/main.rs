//! Command-line front end for hypercube max-flow experiments.
//!
//! Reports are printed to `stdout` as JSON; diagnostics go to `stderr`
//! through `tracing`.

use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    flow::{self, FlowArgs},
    sweep::{self, SweepArgs},
    version::{self, VersionArgs},
};
use tracing::error;

mod commands;
mod config;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "hcf-sim", about = "Edmonds-Karp max flow on random hypercubes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build one hypercube, compute its corner-to-corner max flow and report it.
    Flow(FlowArgs),
    /// Solve a range of dimensions over several seeded trials and report means.
    Sweep(SweepArgs),
    /// Print the tool version.
    Version(VersionArgs),
}

fn dispatch(command: &Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Flow(args) => flow::run(args),
        Command::Sweep(args) => sweep::run(args),
        Command::Version(args) => version::run(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialise logging: {err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = dispatch(&cli.command) {
        error!(error = %err, "command failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flow_flags_parse() {
        let cli = Cli::try_parse_from([
            "hcf-sim",
            "flow",
            "--size",
            "5",
            "--seed",
            "9",
            "--sink",
            "30",
            "--print-flow",
        ])
        .unwrap();
        match cli.command {
            Command::Flow(args) => {
                assert_eq!(args.size, 5);
                assert_eq!(args.seed, 9);
                assert_eq!(args.sink, Some(30));
                assert!(args.print_flow);
                assert!(args.glpk.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn flow_requires_a_size() {
        assert!(Cli::try_parse_from(["hcf-sim", "flow"]).is_err());
    }
}
