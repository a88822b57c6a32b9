//! Configuration checks with field-level messages.
//!
//! Every finding is a warning: options that look wrong still produce a working
//! logger, so only setup I/O can fail construction.

use chrono::format::{Item, StrftimeItems};
use thiserror::Error;

use crate::config::LoggerConfig;

/// A single validation finding, keyed by the option name.
#[derive(Debug, Error)]
#[error("logger option '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// All warnings found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Whether chrono can render `pattern` without error.
pub fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Check a resolved config.
pub fn validate(config: &LoggerConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !is_valid_date_format(&config.date_format) {
        report.warn(
            "dateFormat",
            format!(
                "'{}' is not a valid strftime pattern; the default is used",
                config.date_format
            ),
        );
    }
    if config.extension.starts_with('.') {
        report.warn("extension", "leading '.' produces a double dot in the file name");
    }
    if config.filename.as_deref().is_some_and(|f| f.trim().is_empty()) {
        report.warn("filename", "empty filename leaves only the extension");
    }
    if config.flush_frequency == Some(0) {
        report.warn("flushFrequency", "0 disables periodic flushing");
    }
    if let Some(template) = &config.log_format {
        if !template.contains("{message}") {
            report.warn("logFormat", "template has no {message} placeholder");
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_clean() {
        let report = validate(&LoggerConfig::default());
        assert!(report.is_clean(), "warnings: {:?}", report.warnings);
    }

    #[test]
    fn broken_date_format_warns() {
        assert!(!is_valid_date_format("%Y-%"));
        let config = LoggerConfig {
            date_format: "%Q".to_string(),
            ..Default::default()
        };
        let report = validate(&config);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].path, "dateFormat");
    }

    #[test]
    fn nested_filename_and_prefix_are_accepted() {
        let config = LoggerConfig {
            filename: Some("archive/app.log".to_string()),
            prefix: "daily/".to_string(),
            ..Default::default()
        };
        assert!(validate(&config).is_clean());
    }

    #[test]
    fn questionable_options_warn() {
        let config = LoggerConfig {
            log_format: Some("{date} {level}".to_string()),
            flush_frequency: Some(0),
            extension: ".log".to_string(),
            ..Default::default()
        };
        let report = validate(&config);
        assert_eq!(report.warnings.len(), 3);
    }
}
