//! Changed-line extraction from `git diff -U0` output.

use super::hunk::{parse_hunk_header, ChangedLines, Side};

/// Collect the destination-side lines touched by a zero-context diff.
///
/// Every hunk header contributes its `+C[,D]` range; all other lines are
/// ignored. Deletion-only hunks (`+C,0`) contribute nothing.
pub fn changed_lines_from_diff(diff_output: &str) -> ChangedLines {
    let mut changed = ChangedLines::new();

    for line in diff_output.lines() {
        if let Some(range) = parse_hunk_header(line, Side::Destination) {
            changed.insert_range(range);
        }
    }

    changed
}
