//! Unified diff parsing primitives for style-check.
//!
//! This module turns zero-context unified diffs into line numbers:
//! - Hunk headers (`@@ -A[,B] +C[,D] @@`) into half-open line ranges
//! - `git diff -U0` output into the set of changed destination lines
//!
//! Only hunk headers are interpreted; body lines are never counted, so the
//! result is exact for `-U0` output and independent of file headers.

mod hunk;
mod parser;


pub use hunk::{parse_hunk_header, ChangedLines, LineRange, Side};
pub use parser::changed_lines_from_diff;
