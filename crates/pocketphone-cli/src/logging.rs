//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the `-v`/`-q` level. Logs go to stderr, except while
//! the phone owns the terminal, when they are appended to a file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

fn filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Logs to stderr
pub fn init_stderr(verbosity: Verbosity) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

/// Appends logs to `path`, creating its directory
pub fn init_file(verbosity: Verbosity, path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
