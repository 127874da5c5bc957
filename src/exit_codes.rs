//! Exit code constants for the apt-queue CLI.
//!
//! - 0: Success (lock acquired, queued command exited 0)
//! - 1: User error (bad arguments or configuration)
//! - 2: Daemonization failure (could not fork)
//!
//! A run that reaches the engine exits with the engine's final status
//! instead: the queued command's exit code, or the errno of the last
//! lock denial.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or configuration.
pub const USER_ERROR: i32 = 1;

/// Daemonization failure: the process could not fork.
pub const DAEMON_FAILURE: i32 = 2;

/// Clamp an engine status into the range the OS can report.
///
/// Statuses outside 0..=255 (a negative sentinel, or a raw wait status
/// that slipped through) all collapse to 255 so they still read as
/// failure to the caller.
pub fn to_exit_byte(status: i32) -> u8 {
    u8::try_from(status).unwrap_or(u8::MAX)
}
