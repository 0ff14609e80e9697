//! Error types for bookfolio.
//!
//! Navigation itself never fails. These cover the edges: the terminal,
//! the config file, log setup, and user-supplied page slugs.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for bookfolio operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for our schema.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config file parses but holds values the reader cannot use.
    #[error("invalid config {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    /// A slug that names no page.
    #[error("unknown page: {0:?} (try `bookfolio contents`)")]
    UnknownPage(String),

    /// JSON encoding of catalog output failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// `check` found links or records that do not line up.
    #[error("catalog has {0} integrity defect(s)")]
    Integrity(usize),

    /// The tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result type alias for bookfolio operations.
pub type Result<T> = std::result::Result<T, BookError>;
