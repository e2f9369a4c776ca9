//! Command implementations for style-check.

mod check;

pub use check::cmd_check;
