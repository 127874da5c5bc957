//! Outcome types for lock requests.

use std::fmt;

/// Why a lock request failed for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialKind {
    /// The lock file itself could not be opened (missing, or we lack
    /// the privilege to open it read/write).
    Unopenable,
    /// The kernel refused the lock request outright.
    PermissionDenied,
    /// Anything else; the raw errno is preserved.
    Other,
}

/// A permanent lock denial.
///
/// Carries the raw errno, which becomes the run's exit status if every
/// attempt ends this way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Denial {
    pub kind: DenialKind,
    /// Raw errno (-1 when the OS gave none).
    pub errno: i32,
}

impl Denial {
    /// The status code this denial contributes to the run.
    pub fn status(&self) -> i32 {
        self.errno
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DenialKind::Unopenable => write!(f, "could not open (errno {})", self.errno),
            DenialKind::PermissionDenied => write!(f, "Permission Denied"),
            DenialKind::Other => write!(f, "Unknown Error?: {}", self.errno),
        }
    }
}

/// Result of one non-blocking exclusive lock request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAttempt {
    /// We own the lock.
    Acquired,
    /// Another process holds it right now; worth waiting out.
    Contended,
    /// Permanently refused; retrying within this attempt is pointless.
    Denied(Denial),
}

/// One attempt-scoped exclusive lock on a shared resource.
///
/// Implementations issue single non-blocking requests; the engine owns
/// the waiting and retry policy on top of them.
pub trait LockResource {
    /// Issue one non-blocking exclusive lock request.
    fn request(&mut self) -> LockAttempt;

    /// Release the lock and close the underlying handle.
    ///
    /// Safe to call whether or not the lock is currently held.
    fn release(&mut self);

    /// Human-readable name of the resource, for log lines.
    fn describe(&self) -> String;
}
