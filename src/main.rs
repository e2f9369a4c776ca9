//! style-check: report formatter violations on the lines a change touches.
//!
//! This is the main entry point for the `style-check` CLI. It parses
//! arguments, sets up logging, runs the check, and maps the outcome to an
//! exit code.

mod checker;
mod cli;
mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod filter;
pub mod formatter;
pub mod git;
mod report;
pub mod source;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match commands::cmd_check(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // The violation report is already on stdout.
            if !err.is_reported() {
                eprintln!("Error: {}", err);
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
