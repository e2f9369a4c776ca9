//! Run configuration for style-check.
//!
//! Everything a run needs is resolved once at startup from the CLI arguments
//! and the repository location. Nothing below this point reads the process
//! environment or the tool's install location.

use crate::cli::Cli;
use crate::error::Result;
use crate::git::get_repo_root;
use std::path::{Path, PathBuf};


/// Resolved settings for one style-check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Repository root; every subprocess runs here.
    pub repo_root: PathBuf,
    /// Revision being checked.
    pub commit: String,
    /// Baseline revision before merge-base resolution.
    pub upstream: String,
    /// Absolute path of the ignore-list file.
    pub ignore_file: PathBuf,
    /// Formatter command line with `{config}`/`{file}` placeholders.
    pub formatter_command: String,
    /// Absolute path of the formatter configuration.
    pub formatter_config: PathBuf,
    /// Coding standards link printed with violations.
    pub style_url: String,
}

impl CheckConfig {
    /// Resolve CLI arguments relative to the repository containing `cwd`.
    ///
    /// # Returns
    ///
    /// * `Ok(CheckConfig)` - Fully resolved configuration
    /// * `Err(StyleError::UserError)` - `cwd` is not inside a git repository
    pub fn resolve<P: AsRef<Path>>(cli: &Cli, cwd: P) -> Result<Self> {
        let repo_root = get_repo_root(cwd)?;
        Ok(Self::with_root(cli, repo_root))
    }

    /// Build the configuration for a known repository root.
    pub fn with_root(cli: &Cli, repo_root: PathBuf) -> Self {
        let ignore_file = resolve_path(&repo_root, &cli.ignore_file);
        let formatter_config = resolve_path(&repo_root, &cli.formatter_config);

        Self {
            repo_root,
            commit: cli.commit.clone(),
            upstream: cli.upstream.clone(),
            ignore_file,
            formatter_command: cli.formatter.clone(),
            formatter_config,
            style_url: cli.style_url.clone(),
        }
    }
}

fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
