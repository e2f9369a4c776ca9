//! Exit code constants for the style-check CLI.
//!
//! - 0: Every checked file is clean
//! - 1: At least one file has a style violation on a changed line
//! - 2: User error (bad args, not a repository, missing ignore file)
//! - 3: Git operation failure
//! - 4: Formatter or diff utility failure

/// No violations found in any checked file.
pub const SUCCESS: i32 = 0;

/// Style violations found on changed lines.
pub const VIOLATIONS: i32 = 1;

/// User error: bad arguments, invalid configuration, not inside a repository.
pub const USER_ERROR: i32 = 2;

/// Git operation failure: unknown revision, unreadable object, merge-base failure.
pub const GIT_FAILURE: i32 = 3;

/// Formatter failure, diff utility trouble, or temporary file I/O.
pub const TOOL_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, VIOLATIONS, USER_ERROR, GIT_FAILURE, TOOL_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn violations_exit_with_one() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(VIOLATIONS, 1);
    }
}
