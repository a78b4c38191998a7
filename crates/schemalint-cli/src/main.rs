//! # schemalint CLI entry point
//!
//! Parses command-line arguments, initialises logging, builds the rule
//! registry once, and dispatches to the subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use schemalint_cli::check::{run_check, CheckArgs};
use schemalint_cli::rules::{run_rules, RulesArgs};
use schemalint_schema::{RuleRegistry, ValidationEngine};

/// schemalint — semantic consistency checks for schema definitions.
///
/// Reports cross-field contradictions that a schema parser accepts but a
/// type generator cannot honour, such as `minItems` above `maxItems` or a
/// `tsEnumNames` list that does not line up with `enum`.
#[derive(Parser, Debug)]
#[command(name = "schemalint", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check schema files and print every violation.
    Check(CheckArgs),

    /// List the registered rules in evaluation order.
    Rules(RulesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let engine = ValidationEngine::new(RuleRegistry::builtin());
    tracing::debug!(rules = engine.registry().len(), "rule registry initialised");

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Check(args) => run_check(&args, &engine, &mut stdout),
        Commands::Rules(args) => run_rules(&args, &engine, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(schemalint_cli::EXIT_LOAD_FAILURE)
        }
    }
}
