//! Error types for the line logger.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for logger operations.
pub type Result<T> = std::result::Result<T, LogError>;

/// Errors raised while setting up a logger or appending to its target.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log directory did not exist and could not be created.
    #[error("failed to create log directory at {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A log file already exists at the resolved path but is read-only.
    #[error("log file {path} could not be written to; check that appropriate permissions have been set")]
    NotWritable { path: PathBuf },

    /// The target could not be opened.
    #[error("failed to open log target {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An append or flush on the open target failed.
    #[error("failed to write to log target {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A `stream://` address named a stream that does not exist.
    #[error("unknown log stream '{0}'; expected stream://stdout or stream://stderr")]
    UnknownStream(String),

    /// A level name did not match any of the eight severities.
    #[error("unknown log level '{0}'")]
    UnknownLevel(String),

    /// The options file could not be read.
    #[error("failed to read logger options from {path}: {source}")]
    ReadOptions {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse logger options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse logger options: {0}")]
    Json(#[from] serde_json::Error),
}
