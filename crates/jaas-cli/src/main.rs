//! # jaas-lint entry point
//!
//! Parses command-line arguments, initializes tracing, resolves the data
//! directory, and dispatches the validation run. The process exit code is
//! the run's verdict: 0 when every check passed, 1 otherwise.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jaas_cli::resolve_data_root;
use jaas_cli::validate::{run_validate, ValidateArgs};

/// JaaS joke dataset validator.
///
/// Validates data/jokes.json against data/schema.json and the dataset
/// invariants: unique ids, whitelisted categories, and per-category
/// coverage (advisory).
#[derive(Parser, Debug)]
#[command(name = "jaas-lint", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: ValidateArgs,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let data_root = match resolve_data_root() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            return ExitCode::from(1);
        }
    };

    tracing::debug!(data_root = %data_root.display(), "resolved data directory");

    match run_validate(&cli.args, &data_root) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::from(1)
        }
    }
}
