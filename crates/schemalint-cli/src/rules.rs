//! # Rules Subcommand
//!
//! Lists the rules the engine will evaluate, in evaluation order.

use std::io::Write;

use clap::Args;
use schemalint_schema::ValidationEngine;

/// Arguments for the rules subcommand.
#[derive(Args, Debug)]
pub struct RulesArgs {}

/// Print `<n>. <rule name>` for every registered rule.
pub fn run_rules(
    _args: &RulesArgs,
    engine: &ValidationEngine,
    out: &mut impl Write,
) -> anyhow::Result<u8> {
    for (i, name) in engine.registry().names().iter().enumerate() {
        writeln!(out, "{}. {name}", i + 1)?;
    }
    Ok(crate::EXIT_CLEAN)
}
