//! # schemalint-cli — Command-Line Interface
//!
//! Thin clap-based front end over `schemalint-schema`.
//!
//! ## Subcommands
//!
//! - `check`: load schema files and print one line per violation
//! - `rules`: list the registered rules in evaluation order
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | every file loaded and no violations were found |
//! | 1 | at least one violation was reported |
//! | 2 | at least one file could not be loaded |
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers write to a caller-supplied writer so they can be tested
//!   without capturing stdout.
//! - No validation logic lives here.

pub mod check;
pub mod rules;

/// Exit code when every file loaded and nothing was reported.
pub const EXIT_CLEAN: u8 = 0;
/// Exit code when at least one diagnostic was reported.
pub const EXIT_VIOLATIONS: u8 = 1;
/// Exit code when at least one file could not be loaded.
pub const EXIT_LOAD_FAILURE: u8 = 2;
