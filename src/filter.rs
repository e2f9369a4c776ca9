//! File filtering for style checks.
//!
//! A changed file is checked only when it is a C/C++ source or header and
//! does not live under a directory listed in the ignore file.

use crate::error::{Result, StyleError};
use std::path::Path;

/// Default ignore file name, relative to the repository root.
pub const DEFAULT_IGNORE_FILE: &str = ".style_ignored_dirs";

/// Extensions the formatter is run on (case-sensitive).
pub const CHECKED_EXTENSIONS: &[&str] = &["c", "cpp", "h", "hpp"];

/// Returns true if `path` must not be checked.
///
/// A path is ignored when its extension is not in [`CHECKED_EXTENSIONS`] or
/// when it starts with any of the `ignore_dirs` prefixes.
pub fn is_ignored(path: &str, ignore_dirs: &[String]) -> bool {
    !has_checked_extension(path) || ignore_dirs.iter().any(|dir| path.starts_with(dir.as_str()))
}

fn has_checked_extension(path: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| CHECKED_EXTENSIONS.contains(&ext))
}

/// Ordered list of path prefixes excluded from style checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    prefixes: Vec<String>,
}

impl IgnoreList {
    /// Load the ignore list from a file.
    ///
    /// # Returns
    ///
    /// * `Ok(IgnoreList)` - Parsed prefixes
    /// * `Err(StyleError::ConfigError)` - The file is missing or unreadable
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            StyleError::ConfigError(format!(
                "failed to read ignore file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::parse(&content))
    }

    /// Parse ignore-file text: one prefix per line, `#` comments and blank lines skipped.
    pub fn parse(content: &str) -> Self {
        let prefixes = content
            .lines()
            .filter(|line| !line.starts_with('#'))
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        is_ignored(path, &self.prefixes)
    }
}
