//! Logger configuration: the caller's partial options map and the resolved config.
//!
//! Options arrive as a partial map (`LoggerOptions`, every key optional) and are
//! merged with the defaults exactly once by [`LoggerOptions::resolve`]. The
//! resulting [`LoggerConfig`] does not change for the lifetime of a logger, except
//! for the date format, which has an explicit setter on the logger.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{LogError, Result};

/// Default file suffix when no explicit filename carries one.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Default timestamp pattern, with microsecond precision.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Default prefix of date-derived file names.
pub const DEFAULT_PREFIX: &str = "log_";

/// Resolved logger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Suffix appended to the file name (without the dot).
    pub extension: String,
    /// chrono strftime pattern applied to each entry's timestamp.
    pub date_format: String,
    /// Explicit file name used instead of the date-derived one.
    pub filename: Option<String>,
    /// Flush the target every N writes. `None` and `Some(0)` leave flushing to the platform.
    pub flush_frequency: Option<u32>,
    /// Prefix of the date-derived file name.
    pub prefix: String,
    /// Template replacing the default `[date] [level] message` layout.
    pub log_format: Option<String>,
    /// Append the context block beneath the message line.
    pub append_context: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            filename: None,
            flush_frequency: None,
            prefix: DEFAULT_PREFIX.to_string(),
            log_format: None,
            append_context: true,
        }
    }
}

impl LoggerConfig {
    /// The flush interval, if periodic flushing is enabled.
    pub fn flush_interval(&self) -> Option<u64> {
        self.flush_frequency.filter(|n| *n > 0).map(u64::from)
    }
}

/// Partial options map as supplied by the caller.
///
/// Keys are camelCase (`extension`, `dateFormat`, `filename`, `flushFrequency`,
/// `prefix`, `logFormat`, `appendContext`); unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoggerOptions {
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub date_format: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub flush_frequency: Option<u32>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub log_format: Option<String>,
    #[serde(default)]
    pub append_context: Option<bool>,
}

impl LoggerOptions {
    /// Parse options from a JSON value, typically an object literal.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Parse options from a YAML document.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Merge these options over the defaults.
    pub fn resolve(self) -> LoggerConfig {
        let defaults = LoggerConfig::default();
        LoggerConfig {
            extension: self.extension.unwrap_or(defaults.extension),
            date_format: self.date_format.unwrap_or(defaults.date_format),
            filename: self.filename,
            flush_frequency: self.flush_frequency,
            prefix: self.prefix.unwrap_or(defaults.prefix),
            log_format: self.log_format,
            append_context: self.append_context.unwrap_or(defaults.append_context),
        }
    }
}

/// Load an options map from a YAML file.
pub fn load_options(path: &Path) -> Result<LoggerOptions> {
    let raw = std::fs::read_to_string(path).map_err(|source| LogError::ReadOptions {
        path: path.to_path_buf(),
        source,
    })?;
    let options = LoggerOptions::from_yaml_str(&raw)?;
    debug!(path = %path.display(), "Loaded logger options");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_options_resolve_to_defaults() {
        let config = LoggerOptions::default().resolve();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.extension, "txt");
        assert_eq!(config.prefix, "log_");
        assert!(config.append_context);
        assert!(config.flush_interval().is_none());
    }

    #[test]
    fn caller_options_override_defaults() {
        let options = LoggerOptions::from_value(json!({
            "extension": "log",
            "prefix": "error_",
            "flushFrequency": 5,
            "appendContext": false
        }))
        .unwrap();
        let config = options.resolve();
        assert_eq!(config.extension, "log");
        assert_eq!(config.prefix, "error_");
        assert_eq!(config.flush_interval(), Some(5));
        assert!(!config.append_context);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn zero_flush_frequency_disables_flushing() {
        let config = LoggerConfig {
            flush_frequency: Some(0),
            ..Default::default()
        };
        assert!(config.flush_interval().is_none());
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = LoggerOptions::from_value(json!({ "rotate": true })).unwrap_err();
        assert!(matches!(err, LogError::Json(_)));
    }

    #[test]
    fn parses_yaml_options() {
        let options = LoggerOptions::from_yaml_str(
            "filename: custom\nlogFormat: \"{level}{level-padding}{message}\"\n",
        )
        .unwrap();
        assert_eq!(options.filename.as_deref(), Some("custom"));
        assert_eq!(options.log_format.as_deref(), Some("{level}{level-padding}{message}"));
    }

    #[test]
    fn loads_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logger.yaml");
        std::fs::write(&path, "extension: log\nprefix: app_\n").unwrap();
        let config = load_options(&path).unwrap().resolve();
        assert_eq!(config.extension, "log");
        assert_eq!(config.prefix, "app_");

        let missing = load_options(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, LogError::ReadOptions { .. }));
    }
}
