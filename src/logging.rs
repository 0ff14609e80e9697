//! Log setup.
//!
//! The reader owns the terminal, so logs only ever go to a file. The file
//! comes from the config; setting `BOOKFOLIO_LOG` without one logs to
//! `<cache_dir>/bookfolio/bookfolio.log`. With neither, no subscriber is
//! installed and every `tracing` macro is a no-op.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{BookError, Result};

/// Environment variable holding a filter directive. Overrides the config level.
pub const LOG_ENV: &str = "BOOKFOLIO_LOG";

const LOG_FILENAME: &str = "bookfolio.log";

/// Install the file subscriber if logging is configured.
///
/// Returns where logs go, or `None` if logging is off.
pub fn init(config: &LogConfig) -> Result<Option<PathBuf>> {
    let env_directive = std::env::var(LOG_ENV).ok().filter(|v| !v.trim().is_empty());

    let Some(path) = log_path(config, env_directive.is_some()) else {
        return Ok(None);
    };

    let filter = match &env_directive {
        Some(directive) => EnvFilter::try_new(directive),
        None => EnvFilter::try_new(&config.level),
    }
    .map_err(|e| BookError::Logging(format!("invalid log filter: {}", e)))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| BookError::Logging(e.to_string()))?;

    Ok(Some(path))
}

/// The configured file, else the default file when the env var asks for logs.
fn log_path(config: &LogConfig, env_set: bool) -> Option<PathBuf> {
    match &config.file {
        Some(file) => Some(file.clone()),
        None if env_set => dirs::cache_dir().map(|d| d.join("bookfolio").join(LOG_FILENAME)),
        None => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
