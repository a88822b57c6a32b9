use std::path::PathBuf;

use linelog::LogLevel;

/// CLI defaults, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log directory or `stream://` address
    pub dir: PathBuf,
    /// Minimum severity written
    pub threshold: LogLevel,
    /// Optional YAML options file
    pub options: Option<PathBuf>,
    /// Filter for the CLI's own diagnostics
    pub diagnostics: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            threshold: LogLevel::Debug,
            options: None,
            diagnostics: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dir: std::env::var("LINELOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.dir),
            threshold: std::env::var("LINELOG_THRESHOLD")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.threshold),
            options: std::env::var("LINELOG_OPTIONS").ok().map(PathBuf::from),
            diagnostics: std::env::var("RUST_LOG").unwrap_or(defaults.diagnostics),
        }
    }
}
