//! CLI argument parsing for style-check.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Values are turned into a [`crate::config::CheckConfig`] before any work starts.

use crate::filter::DEFAULT_IGNORE_FILE;
use crate::formatter::{DEFAULT_FORMATTER_COMMAND, DEFAULT_FORMATTER_CONFIG};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default commit to check.
pub const DEFAULT_COMMIT: &str = "HEAD";

/// Default upstream revision; the merge-base with the commit is used as baseline.
pub const DEFAULT_UPSTREAM: &str = "origin/master";

/// Coding standards document linked from violation reports.
pub const DEFAULT_STYLE_URL: &str =
    "https://github.com/apache/mynewt-core/blob/master/CODING_STANDARDS.md";

const EXIT_STATUS_HELP: &str = "Exit status:
  0  no violations on changed lines
  1  violations found
  2  usage or configuration error
  3  git failure
  4  formatter or diff failure";

/// style-check: report formatting violations on the lines a change touches.
///
/// Every C/C++ file added or modified between the merge-base of UPSTREAM and
/// COMMIT is run through the formatter. Only formatter hunks overlapping
/// lines changed by the commit range are reported; pre-existing formatting
/// debt elsewhere in the file is ignored.
#[derive(Parser, Debug)]
#[command(name = "style-check")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXIT_STATUS_HELP)]
pub struct Cli {
    /// Revision to check.
    #[arg(default_value = DEFAULT_COMMIT)]
    pub commit: String,

    /// Baseline revision; its merge-base with COMMIT is compared against.
    #[arg(default_value = DEFAULT_UPSTREAM)]
    pub upstream: String,

    /// File listing path prefixes to skip, one per line.
    ///
    /// Relative paths are resolved against the repository root.
    #[arg(long, env = "STYLE_CHECK_IGNORE_FILE", default_value = DEFAULT_IGNORE_FILE)]
    pub ignore_file: PathBuf,

    /// Formatter command line; `{config}` and `{file}` are substituted.
    #[arg(long, env = "STYLE_CHECK_FORMATTER", default_value = DEFAULT_FORMATTER_COMMAND)]
    pub formatter: String,

    /// Formatter configuration file, relative to the repository root.
    #[arg(long, default_value = DEFAULT_FORMATTER_CONFIG)]
    pub formatter_config: PathBuf,

    /// Coding standards link printed with each violation.
    #[arg(long, default_value = DEFAULT_STYLE_URL)]
    pub style_url: String,

    /// When to color the report.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color unless `NO_COLOR` is set, even when stdout is a pipe
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
