//! Error types for the apt-queue CLI.
//!
//! Uses thiserror for derive macros. Only failures that stop anything
//! from being queued are errors; a failed attempt inside the engine is
//! ordinary control flow and surfaces as a plain status code instead.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for apt-queue operations.
#[derive(Error, Debug)]
pub enum QueueError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read or parsed.
    #[error("config error: {0}")]
    ConfigError(String),

    /// The process could not detach from the terminal.
    ///
    /// Fatal: nothing has been queued when this is returned.
    #[error("daemonization failed: {0}")]
    DaemonError(String),
}

impl QueueError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            QueueError::UserError(_) => exit_codes::USER_ERROR,
            QueueError::ConfigError(_) => exit_codes::USER_ERROR,
            QueueError::DaemonError(_) => exit_codes::DAEMON_FAILURE,
        }
    }
}

/// Result type alias for apt-queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = QueueError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = QueueError::ConfigError("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn daemon_error_has_correct_exit_code() {
        let err = QueueError::DaemonError("fork failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::DAEMON_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = QueueError::DaemonError("fork failed: EAGAIN".to_string());
        assert_eq!(err.to_string(), "daemonization failed: fork failed: EAGAIN");

        let err = QueueError::ConfigError("attempts must be at least 1".to_string());
        assert_eq!(err.to_string(), "config error: attempts must be at least 1");
    }
}
