//! Implementation of the style check run.
//!
//! # Steps
//!
//! 1. Replace the upstream revision with its merge-base with the commit
//! 2. Load the ignore list
//! 3. Enumerate files added or modified between merge-base and commit
//! 4. Per file, in order: skip, or format and keep hunks on changed lines
//! 5. Overall result fails if any file has a violation
//!
//! Any git, formatter or configuration failure aborts the run.


use crate::checker::check_file;
use crate::cli::Cli;
use crate::config::CheckConfig;
use crate::error::{Result, StyleError};
use crate::filter::IgnoreList;
use crate::formatter::Formatter;
use crate::git::{changed_files, merge_base};
use crate::report::{configure_colors, Reporter};
use crate::source::GitSource;
use log::{debug, info};

/// What happened to one changed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Filtered out by extension or ignore list.
    Skipped,
    /// Formatter agrees with every changed line.
    Clean,
    /// Formatter hunks overlapping changed lines.
    Violation(Vec<String>),
}

/// Ordered per-file outcomes of a run.
#[derive(Debug, Clone, Default)]
pub struct CheckSummary {
    pub outcomes: Vec<(String, FileOutcome)>,
}

impl CheckSummary {
    /// True when no checked file has a violation.
    pub fn passed(&self) -> bool {
        self.violation_count() == 0
    }

    pub fn violation_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Violation(_)))
    }

    pub fn clean_count(&self) -> usize {
        self.count(|o| *o == FileOutcome::Clean)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| *o == FileOutcome::Skipped)
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Execute the style check described by the CLI arguments.
///
/// Returns `StyleError::Violations` when any file fails, after the report
/// has been printed.
pub fn cmd_check(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        StyleError::UserError(format!("failed to determine current directory: {}", e))
    })?;
    let config = CheckConfig::resolve(cli, &cwd)?;
    let reporter = Reporter::new(configure_colors(cli.color), config.style_url.clone());

    let summary = run_check(&config, &reporter)?;

    info!(
        "{} file(s) clean, {} skipped, {} with violations",
        summary.clean_count(),
        summary.skipped_count(),
        summary.violation_count()
    );

    if summary.passed() {
        Ok(())
    } else {
        Err(StyleError::Violations(summary.violation_count()))
    }
}

/// Check every file changed between the merge-base and the commit.
pub fn run_check(config: &CheckConfig, reporter: &Reporter) -> Result<CheckSummary> {
    let root = &config.repo_root;

    let upstream = merge_base(root, &config.upstream, &config.commit)?;
    debug!(
        "merge-base of {} and {} is {}",
        config.upstream, config.commit, upstream
    );

    let ignore = IgnoreList::load(&config.ignore_file)?;
    debug!(
        "loaded {} ignored prefix(es) from {}",
        ignore.len(),
        config.ignore_file.display()
    );

    let formatter = Formatter::new(
        &config.formatter_command,
        &config.formatter_config,
        root,
    )?;
    let source = GitSource::new(root);

    let mut summary = CheckSummary::default();

    for path in changed_files(root, &upstream, &config.commit)? {
        let outcome = if ignore.is_ignored(&path) {
            reporter.skipped(&path);
            FileOutcome::Skipped
        } else {
            let violations = check_file(&source, &formatter, &path, &config.commit, &upstream)?;
            if violations.is_empty() {
                reporter.clean(&path);
                FileOutcome::Clean
            } else {
                reporter.violation(&path, &violations);
                FileOutcome::Violation(violations)
            }
        };

        summary.outcomes.push((path, outcome));
    }

    Ok(summary)
}
