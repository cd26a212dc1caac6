//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code: bad input, unreadable files, failed checks.
pub const ERROR: i32 = 2;

/// Interrupted by user (Ctrl+C) exit code.
pub const INTERRUPTED: i32 = 130;
