//! Configuration model for apt-queue.
//!
//! Defaults match the classic tool (dpkg's lock, /var/log/apt-queue,
//! one-second polling). An optional YAML file at `/etc/apt-queue.yaml`
//! overrides the defaults, and CLI flags override both. Unknown fields
//! in the YAML are ignored for forward compatibility.


use crate::cli::Cli;
use crate::error::{QueueError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file consulted when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/apt-queue.yaml";

fn default_lock_file() -> PathBuf {
    PathBuf::from("/var/lib/dpkg/lock")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("/var/log/apt-queue")
}

fn default_attempts() -> u32 {
    5
}

fn default_poll_interval_secs() -> u64 {
    1
}

/// Effective settings for one run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lock file to serialize against. Must be the file the package
    /// manager itself locks, with the same lock type, or runs will
    /// overlap with apt/dpkg anyway.
    #[serde(default = "default_lock_file")]
    pub lock_file: PathBuf,

    /// Log file; all output is appended here once detached.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Outer bound on lock-acquire + execute cycles.
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    /// Seconds to sleep between lock polls while another holder is active.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lock_file: default_lock_file(),
            log_file: default_log_file(),
            attempts: default_attempts(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            QueueError::ConfigError(format!("failed to read '{}': {}", path.display(), e))
        })?;

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            QueueError::ConfigError(format!("failed to parse '{}': {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective config from the config file and CLI flags.
    ///
    /// An explicit `--config` file must exist; the default path is only
    /// read when present. CLI flags win over file values.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Config::load(default_path)?
                } else {
                    Config::default()
                }
            }
        };

        if let Some(lock_file) = &cli.lock_file {
            config.lock_file = lock_file.clone();
        }
        if let Some(log_file) = &cli.log_file {
            config.log_file = log_file.clone();
        }
        if let Some(attempts) = cli.attempts {
            config.attempts = attempts;
        }
        if let Some(poll_interval) = cli.poll_interval {
            config.poll_interval_secs = poll_interval;
        }

        config.validate()?;
        Ok(config)
    }

    /// The contention poll interval as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.attempts == 0 {
            return Err(QueueError::ConfigError(
                "attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
