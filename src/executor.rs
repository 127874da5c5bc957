//! Queued command execution.
//!
//! Commands run through `sh -c`, with stdout/stderr appended to the
//! journal and `DEBIAN_FRONTEND` pinned to `noninteractive` so nothing
//! stops to ask a question nobody will see. The executor is a capability
//! trait so the engine can be tested without spawning real processes.

use crate::journal::Journal;
use std::process::{Command, ExitStatus, Stdio};

/// Environment marker forcing the apt frontend non-interactive.
const FRONTEND_ENV: (&str, &str) = ("DEBIAN_FRONTEND", "noninteractive");

/// Status reported when the shell itself cannot be spawned, matching
/// the shell's own convention for an unrunnable command.
const SPAWN_FAILURE_STATUS: i32 = 127;

/// Runs a fully-assembled command line and reports its exit status.
pub trait CommandExecutor {
    fn run(&mut self, cmd: &str, journal: &mut Journal) -> i32;
}

/// Real executor: hands the command line to `sh -c`.
#[derive(Debug, Default)]
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn run(&mut self, cmd: &str, journal: &mut Journal) -> i32 {
        // Flush so our lines land before the command's own output.
        journal.flush();

        let stdout = journal.child_stdio().unwrap_or_else(|_| Stdio::inherit());
        let stderr = journal.child_stdio().unwrap_or_else(|_| Stdio::inherit());

        let status = Command::new("sh")
            .arg("-c")
            .arg(cmd)
            .env(FRONTEND_ENV.0, FRONTEND_ENV.1)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .status();

        match status {
            Ok(status) => exit_status_code(&status),
            Err(e) => {
                journal.line(&format!("Failed to launch shell: {}", e));
                SPAWN_FAILURE_STATUS
            }
        }
    }
}

/// Map an `ExitStatus` to the code the run will report.
///
/// A signal death reports `128 + signal`, the shell convention, so it
/// stays distinguishable from ordinary exit codes in the log.
fn exit_status_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    SPAWN_FAILURE_STATUS
}
