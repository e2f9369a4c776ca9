//! The version-control boundary used by the style checker.
//!
//! The checker only needs two things from the repository: which lines of a
//! file changed in a revision range, and the file's bytes at a revision.
//! Keeping them behind a trait lets the overlap logic run against canned data.

use crate::diff::ChangedLines;
use crate::error::Result;
use crate::git;
use std::path::{Path, PathBuf};

/// Per-file queries against a revision history.
pub trait ChangeSource {
    /// Lines of `path` in `to` that differ from `from`.
    fn changed_lines(&self, path: &str, from: &str, to: &str) -> Result<ChangedLines>;

    /// Exact content of `path` at `revision`.
    fn file_contents(&self, path: &str, revision: &str) -> Result<Vec<u8>>;
}

/// `ChangeSource` backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitSource {
    root: PathBuf,
}

impl GitSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ChangeSource for GitSource {
    fn changed_lines(&self, path: &str, from: &str, to: &str) -> Result<ChangedLines> {
        git::changed_lines(&self.root, path, from, to)
    }

    fn file_contents(&self, path: &str, revision: &str) -> Result<Vec<u8>> {
        git::file_contents(&self.root, path, revision)
    }
}
