//! Lock acquisition against the package manager's advisory lock.
//!
//! This module distinguishes the two ways a lock request can fail:
//!
//! - **Contention**: another process holds the lock right now. That
//!   process is expected to finish, so contention is worth waiting out
//!   (the engine polls indefinitely within one attempt).
//! - **Denial**: the request failed for a reason no amount of waiting
//!   fixes — the lock file cannot be opened, or the kernel refused the
//!   lock. Denials surface immediately and count against the engine's
//!   bounded outer attempts.
//!
//! [`DpkgLock`] is the real implementation; the [`LockResource`] trait
//! exists so the engine's retry policy can be tested against scripted
//! outcomes.

mod dpkg;
mod types;


pub use dpkg::DpkgLock;
pub use types::{Denial, DenialKind, LockAttempt, LockResource};
