//! The lock-and-execute engine.
//!
//! One run is a bounded series of attempts. Each attempt waits for the
//! package manager's lock and then executes the queued command; a zero
//! status ends the run, anything else consumes one attempt and the cycle
//! starts over. The final status of the run is the last attempt's
//! status.
//!
//! Contention and denial are handled at different levels on purpose.
//! Another apt process holding the lock will finish eventually, so the
//! wait inside a single attempt polls indefinitely and never counts
//! against the bound. A lock file that cannot be opened or locked at all
//! ends the attempt immediately and is retried only at the outer bound —
//! transient system state can clear between attempts, but a run must not
//! spin forever on a lock it will never get.


use crate::executor::CommandExecutor;
use crate::journal::Journal;
use crate::lock::{Denial, DenialKind, LockAttempt, LockResource};
use std::time::Duration;

/// Drives the acquire/execute/retry cycle for one queued command.
pub struct Engine<'a, L, E, S>
where
    L: LockResource,
    E: CommandExecutor,
    S: FnMut(Duration),
{
    lock: L,
    executor: E,
    journal: &'a mut Journal,
    poll_interval: Duration,
    sleep: S,
}

impl<'a, L, E, S> Engine<'a, L, E, S>
where
    L: LockResource,
    E: CommandExecutor,
    S: FnMut(Duration),
{
    pub fn new(
        lock: L,
        executor: E,
        journal: &'a mut Journal,
        poll_interval: Duration,
        sleep: S,
    ) -> Self {
        Self {
            lock,
            executor,
            journal,
            poll_interval,
            sleep,
        }
    }

    /// Run the full retry cycle: up to `attempts` lock-acquire + execute
    /// cycles, stopping early on the first zero status.
    pub fn run(&mut self, cmd: Option<&str>, attempts: u32) -> i32 {
        let mut status = 0;
        for attempt in 1..=attempts {
            status = self.attempt(cmd);
            if status == 0 {
                return 0;
            }
            self.journal.line(&format!(
                "Attempt {} of {} failed with status {}",
                attempt, attempts, status
            ));
        }
        status
    }

    /// One lock-acquire + execute cycle.
    fn attempt(&mut self, cmd: Option<&str>) -> i32 {
        match self.acquire() {
            Ok(()) => {
                // Release before running: the queued command is the
                // package manager, and it takes this same lock itself.
                self.lock.release();
                self.execute(cmd)
            }
            Err(denial) => {
                self.lock.release();
                denial.status()
            }
        }
    }

    /// Wait for the lock within one attempt.
    ///
    /// Contention sleeps the poll interval and re-requests, with no
    /// bound of its own. A denial returns immediately so the outer loop
    /// can count it.
    fn acquire(&mut self) -> Result<(), Denial> {
        loop {
            match self.lock.request() {
                LockAttempt::Acquired => {
                    self.journal.line("Got a lock!");
                    return Ok(());
                }
                LockAttempt::Contended => {
                    self.journal.line(&format!(
                        "Could not get a lock {} - resource not available... sleeping",
                        self.lock.describe()
                    ));
                    (self.sleep)(self.poll_interval);
                }
                LockAttempt::Denied(denial) => {
                    let name = self.lock.describe();
                    let msg = match denial.kind {
                        DenialKind::Unopenable => format!(
                            "Couldn't open {}: errno {}. Are you root?",
                            name, denial.errno
                        ),
                        _ => format!("Could not get a lock {} - {}", name, denial),
                    };
                    self.journal.line(&msg);
                    return Err(denial);
                }
            }
        }
    }

    /// Execute the queued command, or report that there is nothing to run.
    fn execute(&mut self, cmd: Option<&str>) -> i32 {
        let Some(cmd) = cmd else {
            self.journal.line("Nothing to run?");
            return 0;
        };

        self.journal.line(&format!("Running Queued Command: {}", cmd));
        self.journal
            .line("-------------------------------------------");
        self.executor.run(cmd, self.journal)
    }
}
