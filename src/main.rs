//! apt-queue: serializes package-manager commands behind the dpkg lock.
//!
//! Several installers started at once (GUI frontends, scripts, cron jobs)
//! all contend for the same dpkg advisory lock. apt-queue detaches from
//! the caller's terminal, waits its turn for the lock, runs the queued
//! command, and exits with the command's status. The caller gets its
//! prompt back immediately; everything else lands in the log file.

mod cli;
pub mod config;
pub mod daemon;
pub mod engine;
pub mod error;
pub mod executor;
pub mod exit_codes;
pub mod journal;
pub mod lock;

use cli::Cli;
use config::Config;
use daemon::Fork;
use engine::Engine;
use error::Result;
use executor::ShellExecutor;
use journal::Journal;
use lock::DpkgLock;
use std::process::ExitCode;
use std::thread;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(status) => ExitCode::from(exit_codes::to_exit_byte(status)),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(exit_codes::to_exit_byte(err.exit_code()))
        }
    }
}

/// Resolve configuration, detach from the terminal, and drive the
/// lock-and-execute engine. Returns the final status of the run.
fn run(cli: Cli) -> Result<i32> {
    let config = Config::resolve(&cli)?;
    let cmd = cli.command_line();

    // Installed before the fork so the detached child inherits it.
    daemon::ignore_hangup()?;

    if !cli.foreground {
        if let Fork::Parent { child } = daemon::detach()? {
            println!("Backgrounding process, child PID: {}", child);
            println!("Logging to {}", config.log_file.display());
            return Ok(exit_codes::SUCCESS);
        }
    }

    let mut journal = Journal::open(&config.log_file);
    journal.stamped("Starting Program");

    let mut engine = Engine::new(
        DpkgLock::new(&config.lock_file),
        ShellExecutor,
        &mut journal,
        config.poll_interval(),
        thread::sleep,
    );
    let status = engine.run(cmd.as_deref(), config.attempts);

    journal.line(&format!(">> return err: {}", status));
    journal.stamped("Program Finished");

    Ok(status)
}
