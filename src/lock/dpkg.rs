//! fcntl-based lock on the dpkg frontend lock file.
//!
//! The request mirrors the exact lock apt and dpkg take themselves: an
//! exclusive write lock over the whole file, starting at offset zero.
//! Anything weaker would serialize apt-queue runs against each other
//! but not against the package manager.

use super::types::{Denial, DenialKind, LockAttempt, LockResource};
use nix::errno::Errno;
use nix::fcntl::{self, FcntlArg};
use std::fs::{File, OpenOptions};
use std::os::unix::io::AsRawFd;
use std::path::PathBuf;

/// Attempt-scoped handle on the package manager's lock file.
///
/// The file is opened on the first request and stays open across
/// contention polls; [`LockResource::release`] closes it, which drops
/// any POSIX lock held on the descriptor.
#[derive(Debug)]
pub struct DpkgLock {
    path: PathBuf,
    file: Option<File>,
}

impl DpkgLock {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    /// Issue the non-blocking F_SETLK request apt and dpkg use.
    fn try_lock(file: &File) -> LockAttempt {
        // SAFETY: zeroing a flock struct is a valid initial state; the
        // fields we care about are set explicitly below.
        let mut fl: libc::flock = unsafe { std::mem::zeroed() };
        fl.l_type = libc::F_WRLCK as libc::c_short;
        fl.l_whence = libc::SEEK_SET as libc::c_short;
        fl.l_start = 0;
        fl.l_len = 0;

        match fcntl::fcntl(file.as_raw_fd(), FcntlArg::F_SETLK(&fl)) {
            Ok(_) => LockAttempt::Acquired,
            // Linux reports contention on F_SETLK as EAGAIN.
            Err(Errno::EAGAIN) => LockAttempt::Contended,
            Err(Errno::EACCES) => LockAttempt::Denied(Denial {
                kind: DenialKind::PermissionDenied,
                errno: Errno::EACCES as i32,
            }),
            Err(e) => LockAttempt::Denied(Denial {
                kind: DenialKind::Other,
                errno: e as i32,
            }),
        }
    }
}

impl LockResource for DpkgLock {
    fn request(&mut self) -> LockAttempt {
        let file = match self.file.take() {
            Some(file) => file,
            None => match OpenOptions::new().read(true).write(true).open(&self.path) {
                Ok(file) => file,
                Err(e) => {
                    return LockAttempt::Denied(Denial {
                        kind: DenialKind::Unopenable,
                        errno: e.raw_os_error().unwrap_or(-1),
                    });
                }
            },
        };

        let attempt = Self::try_lock(&file);
        self.file = Some(file);
        attempt
    }

    fn release(&mut self) {
        // Closing the descriptor drops the POSIX lock.
        self.file = None;
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
