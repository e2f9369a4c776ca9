//! Hunk header parsing and line-range arithmetic.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Hunk header pattern; trailing function context after the closing `@@` is allowed.
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("Invalid hunk header regex")
});

/// Which side of a comparison a hunk range describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The `-A[,B]` part: lines in the old file.
    Source,
    /// The `+C[,D]` part: lines in the new file.
    Destination,
}

/// A half-open range of 1-based line numbers `[first, last)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub first: usize,
    pub last: usize,
}

impl LineRange {
    /// Build the range covered by a hunk starting at `first`.
    ///
    /// A missing count means a single-line hunk.
    pub fn from_hunk(first: usize, count: Option<usize>) -> Self {
        let last = first.saturating_add(count.unwrap_or(1));
        Self { first, last }
    }

    pub fn len(&self) -> usize {
        self.last.saturating_sub(self.first)
    }

    /// Returns true for zero-count hunks (pure insertions or deletions on this side).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.first && line < self.last
    }

    /// Iterate over the line numbers in the range.
    pub fn lines(&self) -> std::ops::Range<usize> {
        self.first..self.last
    }

    /// Returns true if at least one line of the range is in `changed`.
    pub fn overlaps(&self, changed: &ChangedLines) -> bool {
        !self.is_empty() && changed.0.range(self.first..self.last).next().is_some()
    }
}

/// Deduplicated set of changed line numbers.
///
/// Ranges from several hunks are flattened into it; only membership matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedLines(BTreeSet<usize>);

impl ChangedLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every line of `range` to the set.
    pub fn insert_range(&mut self, range: LineRange) {
        self.0.extend(range.lines());
    }

    pub fn contains(&self, line: usize) -> bool {
        self.0.contains(&line)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for ChangedLines {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse one side of a hunk header line.
///
/// Format: "@@ -old_start[,old_len] +new_start[,new_len] @@[ context]"
///
/// Returns `None` for anything that is not a hunk header: body lines,
/// `---`/`+++` file headers, or malformed markers.
pub fn parse_hunk_header(line: &str, side: Side) -> Option<LineRange> {
    let caps = HUNK_HEADER_REGEX.captures(line)?;

    let (start_group, count_group) = match side {
        Side::Source => (1, 2),
        Side::Destination => (3, 4),
    };

    let first = caps.get(start_group)?.as_str().parse().ok()?;
    let count = match caps.get(count_group) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };

    Some(LineRange::from_hunk(first, count))
}
