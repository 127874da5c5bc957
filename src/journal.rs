//! Append-only run journal.
//!
//! The queue runs detached, so everything it has to say goes to a log
//! file rather than a terminal. Opening the log is best effort: when the
//! file cannot be opened the journal falls back to stdout with a warning
//! instead of aborting the run. The underlying handle can be cloned into
//! a child process's stdout/stderr so command output interleaves with
//! our own lines in the same file.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::process::Stdio;

/// Timestamp format for the bracket lines, e.g. `2026-08-23 14:03:07 +0200`.
const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug)]
enum Sink {
    File(File),
    Stdout,
}

/// Log sink for one run.
#[derive(Debug)]
pub struct Journal {
    sink: Sink,
}

impl Journal {
    /// Open the journal in append mode, creating the file if needed.
    ///
    /// Falls back to stdout when the log file cannot be opened; a
    /// logging failure must never abort the queue.
    pub fn open(path: &Path) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                sink: Sink::File(file),
            },
            Err(e) => {
                eprintln!(
                    "Warning: could not open log file '{}': {}; logging to stdout",
                    path.display(),
                    e
                );
                Self { sink: Sink::Stdout }
            }
        }
    }

    /// Write one plain line.
    pub fn line(&mut self, msg: &str) {
        self.write_all(format!("{}\n", msg).as_bytes());
    }

    /// Write one line with the `>> <timestamp>: ` prefix.
    pub fn stamped(&mut self, msg: &str) {
        let now = Local::now().format(STAMP_FORMAT);
        self.write_all(format!(">> {}: {}\n", now, msg).as_bytes());
    }

    /// Flush buffered output.
    ///
    /// Called before handing the log to a child process so line ordering
    /// stays deterministic relative to the child's own output.
    pub fn flush(&mut self) {
        let result = match &mut self.sink {
            Sink::File(file) => file.flush(),
            Sink::Stdout => io::stdout().flush(),
        };
        if let Err(e) = result {
            eprintln!("Warning: log flush failed: {}", e);
        }
    }

    /// Clone the underlying log handle for a child's stdout or stderr.
    pub fn child_stdio(&self) -> io::Result<Stdio> {
        match &self.sink {
            Sink::File(file) => Ok(Stdio::from(file.try_clone()?)),
            Sink::Stdout => Ok(Stdio::inherit()),
        }
    }

    fn write_all(&mut self, bytes: &[u8]) {
        let result = match &mut self.sink {
            Sink::File(file) => file.write_all(bytes),
            Sink::Stdout => io::stdout().write_all(bytes),
        };
        if let Err(e) = result {
            eprintln!("Warning: log write failed: {}", e);
        }
    }
}
