//! Process detachment for the queue.
//!
//! The caller gets its prompt back immediately; the forked child becomes
//! its own session leader and carries the queued command through the
//! lock wait. SIGHUP is ignored before forking: gdebi sends one after a
//! package's postinst completes, and honoring it would kill the very
//! queue it just scheduled.

use crate::error::{QueueError, Result};
use nix::sys::signal::{self, SigHandler, Signal};
use nix::unistd::{self, ForkResult, Pid};

/// Which side of the fork we are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fork {
    /// Original process; `child` is the detached worker's PID.
    Parent { child: Pid },
    /// Detached worker, now a session leader.
    Child,
}

/// Install a no-op handler for SIGHUP.
///
/// Called before [`detach`] so both sides of the fork inherit it.
pub fn ignore_hangup() -> Result<()> {
    // SAFETY: SigIgn installs no Rust callback, so there are no
    // signal-safety obligations on our side.
    unsafe { signal::signal(Signal::SIGHUP, SigHandler::SigIgn) }
        .map(|_| ())
        .map_err(|e| QueueError::DaemonError(format!("failed to ignore SIGHUP: {}", e)))
}

/// Fork away from the invoking terminal.
///
/// The child calls `setsid` so the queue survives the caller's session
/// ending before the lock is acquired; a failed `setsid` is not fatal.
/// A failed fork is: nothing has been queued, and the caller needs to
/// know.
pub fn detach() -> Result<Fork> {
    // SAFETY: single-threaded at this point; nothing between fork and
    // the child's return path allocates or locks.
    match unsafe { unistd::fork() } {
        Ok(ForkResult::Parent { child }) => Ok(Fork::Parent { child }),
        Ok(ForkResult::Child) => {
            let _ = unistd::setsid();
            Ok(Fork::Child)
        }
        Err(e) => Err(QueueError::DaemonError(format!("fork failed: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_hangup_installs_without_error() {
        ignore_hangup().unwrap();
        // Installing twice is fine; the handler is idempotent state.
        ignore_hangup().unwrap();
    }
}
