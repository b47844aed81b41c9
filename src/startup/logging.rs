//! Log file setup.
//!
//! The TUI owns stdout, so logs go to `~/.hanami/logs/hanami.log`. The filter
//! comes from `HANAMI_LOG` and defaults to `hanami=info`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "HANAMI_LOG";
pub const DEFAULT_FILTER: &str = "hanami=info";

/// `~/.hanami/logs`, or `None` when no home directory is known.
pub fn log_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".hanami").join("logs"))
}

/// Filter from `HANAMI_LOG`, falling back to the default on a bad value.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log path. Logging is skipped, not fatal, when the directory
/// cannot be created or a subscriber is already installed.
pub fn init_logging() -> Option<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join("hanami.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "hanami starting");
    Some(path)
}
