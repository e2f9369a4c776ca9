//! Git command runner for style-check.
//!
//! Provides a wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations go through this module;
//! any non-zero exit is a fatal `GitError`.

use crate::diff::{changed_lines_from_diff, ChangedLines};
use crate::error::{Result, StyleError};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Spawn git and return the raw output, mapping non-zero exits to `GitError`.
fn exec_git(cwd: &Path, args: &[&str]) -> Result<Output> {
    debug!("git {} (in {})", args.join(" "), cwd.display());

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            StyleError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    if output.status.success() {
        return Ok(output);
    }

    let git_output = GitOutput::from_output(&output);
    let exit_code = output.status.code().unwrap_or(-1);
    let error_msg = if git_output.stderr.is_empty() {
        git_output.stdout
    } else {
        git_output.stderr
    };

    Err(StyleError::GitError(format!(
        "git {} failed (exit code {}): {}",
        args.first().unwrap_or(&""),
        exit_code,
        error_msg
    )))
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(StyleError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = exec_git(cwd.as_ref(), args)?;
    Ok(GitOutput::from_output(&output))
}

/// Run a git command and return stdout untouched.
///
/// Used where exact bytes matter (file contents at a revision).
pub fn run_git_raw<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<Vec<u8>> {
    let output = exec_git(cwd.as_ref(), args)?;
    Ok(output.stdout)
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(StyleError::UserError)` - If not inside a git repository
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| {
            StyleError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(PathBuf::from(&git_output.stdout))
    } else {
        // Not being in a repository is a usage problem, not a git failure.
        Err(StyleError::UserError(
            "not inside a git repository. Run this command from within a git repository."
                .to_string(),
        ))
    }
}

/// Resolve the common ancestor of two revisions with `git merge-base`.
pub fn merge_base<P: AsRef<Path>>(cwd: P, upstream: &str, commit: &str) -> Result<String> {
    let output = run_git(cwd, &["merge-base", upstream, commit])?;
    let sha = output.lines().first().map(|sha| sha.to_string());

    sha.ok_or_else(|| {
        StyleError::GitError(format!(
            "git merge-base returned no commit for {} and {}",
            upstream, commit
        ))
    })
}

/// List files added or modified between two revisions.
///
/// Runs `git diff -z --diff-filter=AM --name-only {from} {to}`; deleted and
/// renamed-away paths are not reported. Names are NUL-separated so
/// `core.quotePath` never escapes non-ASCII paths.
pub fn changed_files<P: AsRef<Path>>(cwd: P, from: &str, to: &str) -> Result<Vec<String>> {
    let raw = run_git_raw(
        cwd,
        &["diff", "-z", "--no-ext-diff", "--diff-filter=AM", "--name-only", from, to],
    )?;

    let files: Vec<String> = raw
        .split(|&b| b == 0)
        .filter(|name| !name.is_empty())
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .collect();

    Ok(files)
}

/// Collect the lines of `path` touched between two revisions.
///
/// Runs `git diff -U0 {from} {to} -- {path}` and flattens the destination
/// side of every hunk header into a set of line numbers in `to`. Color and
/// external diff drivers are disabled so user config cannot alter the headers.
pub fn changed_lines<P: AsRef<Path>>(
    cwd: P,
    path: &str,
    from: &str,
    to: &str,
) -> Result<ChangedLines> {
    let output = run_git(
        cwd,
        &["diff", "--no-color", "--no-ext-diff", "-U0", from, to, "--", path],
    )?;

    Ok(changed_lines_from_diff(&output.stdout))
}

/// Get the exact bytes of `path` as it existed at `revision`.
pub fn file_contents<P: AsRef<Path>>(cwd: P, path: &str, revision: &str) -> Result<Vec<u8>> {
    let object = format!("{}:{}", revision, path);
    run_git_raw(cwd, &["show", &object])
}
