//! # Check Subcommand
//!
//! Loads each schema file, validates it with the shared engine, and prints
//! the diagnostics. Files that fail to load are logged and skipped; the
//! remaining files are still checked.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use schemalint_schema::{load_schema_file, Diagnostic, ValidationEngine};
use serde::Serialize;

/// Report format for diagnostics.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Error at key ...` line per diagnostic.
    #[default]
    Text,
    /// A single JSON array of diagnostic objects.
    Json,
}

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema files to check (`.json`, `.yaml`, `.yml`).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// JSON report entry: the diagnostic's fields plus its rendered message.
#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
    message: String,
}

/// Run the check subcommand, writing the report to `out`.
///
/// Returns the process exit code: see the crate-level table.
pub fn run_check(
    args: &CheckArgs,
    engine: &ValidationEngine,
    out: &mut impl Write,
) -> anyhow::Result<u8> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut load_failures = 0usize;

    for path in &args.files {
        let label = path.display().to_string();
        let schema = match load_schema_file(path) {
            Ok(schema) => schema,
            Err(e) => {
                tracing::error!("{e}");
                load_failures += 1;
                continue;
            }
        };

        let found = engine.check(&schema, &label);
        tracing::info!(file = %label, diagnostics = found.len(), "checked schema");
        diagnostics.extend(found);
    }

    match args.format {
        OutputFormat::Text => {
            for diagnostic in &diagnostics {
                writeln!(out, "{diagnostic}")?;
            }
        }
        OutputFormat::Json => {
            let report: Vec<JsonDiagnostic<'_>> = diagnostics
                .iter()
                .map(|diagnostic| JsonDiagnostic {
                    diagnostic,
                    message: diagnostic.to_string(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    tracing::debug!(
        files = args.files.len(),
        load_failures,
        diagnostics = diagnostics.len(),
        "check complete"
    );

    Ok(if load_failures > 0 {
        crate::EXIT_LOAD_FAILURE
    } else if !diagnostics.is_empty() {
        crate::EXIT_VIOLATIONS
    } else {
        crate::EXIT_CLEAN
    })
}
