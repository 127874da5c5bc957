//! CLI argument parsing for apt-queue.
//!
//! Uses clap derive macros. Everything after the flags is the command to
//! queue; it is captured verbatim, hyphens included, so invocations like
//! `apt-queue apt-get install -y foo` need no quoting or `--` separator.

use clap::Parser;
use std::path::PathBuf;

/// Queue a package-manager command behind the dpkg lock.
///
/// The command is run in a detached background process once the lock can
/// be acquired; output goes to the log file.
#[derive(Parser, Debug)]
#[command(name = "apt-queue")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Stay in the foreground instead of detaching from the terminal.
    #[arg(long)]
    pub foreground: bool,

    /// Read settings from this config file instead of /etc/apt-queue.yaml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Lock file to serialize against.
    #[arg(long, value_name = "PATH")]
    pub lock_file: Option<PathBuf>,

    /// Log file for the detached process's output.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Maximum lock-acquire + execute cycles before giving up.
    #[arg(long, value_name = "N")]
    pub attempts: Option<u32>,

    /// Seconds to sleep between lock polls while another holder is active.
    #[arg(long, value_name = "SECS")]
    pub poll_interval: Option<u64>,

    /// Command to queue, e.g. `apt-get install -y foo`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Join the queued arguments into a single shell command line.
    ///
    /// Arguments are joined with single spaces. Returns `None` when no
    /// command was supplied (the run then succeeds without executing
    /// anything).
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn plain_command_is_captured() {
        let cli = parse(&["apt-queue", "apt-get", "update"]);
        assert_eq!(cli.command, vec!["apt-get", "update"]);
        assert_eq!(cli.command_line().as_deref(), Some("apt-get update"));
    }

    #[test]
    fn hyphenated_command_arguments_stay_in_the_command() {
        let cli = parse(&["apt-queue", "apt-get", "install", "-y", "htop"]);
        assert_eq!(cli.command, vec!["apt-get", "install", "-y", "htop"]);
        assert_eq!(
            cli.command_line().as_deref(),
            Some("apt-get install -y htop")
        );
    }

    #[test]
    fn flags_before_the_command_are_parsed() {
        let cli = parse(&[
            "apt-queue",
            "--attempts",
            "3",
            "--foreground",
            "dpkg",
            "-i",
            "pkg.deb",
        ]);
        assert_eq!(cli.attempts, Some(3));
        assert!(cli.foreground);
        assert_eq!(cli.command, vec!["dpkg", "-i", "pkg.deb"]);
    }

    #[test]
    fn no_command_yields_none() {
        let cli = parse(&["apt-queue"]);
        assert!(cli.command.is_empty());
        assert!(cli.command_line().is_none());
    }

    #[test]
    fn path_overrides_are_captured() {
        let cli = parse(&[
            "apt-queue",
            "--lock-file",
            "/tmp/lock",
            "--log-file",
            "/tmp/log",
            "--poll-interval",
            "2",
            "true",
        ]);
        assert_eq!(
            cli.lock_file.as_deref(),
            Some(std::path::Path::new("/tmp/lock"))
        );
        assert_eq!(
            cli.log_file.as_deref(),
            Some(std::path::Path::new("/tmp/log"))
        );
        assert_eq!(cli.poll_interval, Some(2));
    }
}
