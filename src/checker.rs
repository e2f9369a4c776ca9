//! Style checking of a single file.
//!
//! The file is formatted as it exists at the checked commit and only the
//! formatter hunks that touch lines changed since the upstream revision are
//! kept. Formatting debt outside the change is never reported.

use crate::diff::{parse_hunk_header, ChangedLines, Side};
use crate::error::{Result, StyleError};
use crate::formatter::Formatter;
use crate::source::ChangeSource;
use log::debug;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Check `path` at `commit` against the lines changed since `upstream`.
///
/// Returns the formatter diff lines (hunk headers included) of every hunk
/// overlapping a changed line. An empty result means the change is clean.
pub fn check_file<S: ChangeSource + ?Sized>(
    source: &S,
    formatter: &Formatter,
    path: &str,
    commit: &str,
    upstream: &str,
) -> Result<Vec<String>> {
    let diff_lines = source.changed_lines(path, upstream, commit)?;
    debug!("{}: {} changed line(s)", path, diff_lines.len());

    if diff_lines.is_empty() {
        return Ok(Vec::new());
    }

    let contents = source.file_contents(path, commit)?;
    let tmp = materialize(path, &contents)?;

    let formatter_diff = formatter.diff(tmp.path())?;

    Ok(overlapping_hunks(&formatter_diff, &diff_lines))
}

/// Write `contents` to a temporary file named after `path`.
///
/// The suffix keeps the original extension so the formatter picks the right
/// language. The file is deleted when the returned handle drops.
fn materialize(path: &str, contents: &[u8]) -> Result<NamedTempFile> {
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut tmp = tempfile::Builder::new()
        .prefix("style-check-")
        .suffix(&file_name)
        .tempfile()
        .map_err(|e| {
            StyleError::FormatterError(format!("failed to create temporary file: {}", e))
        })?;

    tmp.write_all(contents)
        .and_then(|()| tmp.flush())
        .map_err(|e| {
            StyleError::FormatterError(format!(
                "failed to write temporary copy of '{}': {}",
                path, e
            ))
        })?;

    Ok(tmp)
}

/// Keep the hunks of a zero-context unified diff that overlap `changed`.
///
/// Hunk ranges are read from the source side (the unformatted file). Lines
/// before the first hunk header (`---`/`+++`) are never kept.
pub fn overlapping_hunks(diff_output: &str, changed: &ChangedLines) -> Vec<String> {
    let mut kept = Vec::new();
    let mut in_chunk = false;

    for line in diff_output.lines() {
        match parse_hunk_header(line, Side::Source) {
            Some(range) => {
                in_chunk = range.overlaps(changed);
                if in_chunk {
                    kept.push(line.to_string());
                }
            }
            None if in_chunk => kept.push(line.to_string()),
            None => {}
        }
    }

    kept
}
