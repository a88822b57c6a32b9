//! The line logger: threshold filtering, formatting and the write path.

use std::fmt;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use tracing::{debug, trace, warn};

use crate::config::{LoggerConfig, LoggerOptions};
use crate::context::Context;
use crate::error::{LogError, Result};
use crate::format::format_message;
use crate::level::LogLevel;
use crate::target::LogTarget;
use crate::validation::{is_valid_date_format, validate};

/// Appends formatted records to a daily file, a named file or a standard stream.
///
/// A `LineLogger` performs no locking. Every mutating call takes `&mut self`;
/// share an instance across threads only behind the caller's own lock. The
/// handle is flushed and closed when the logger is dropped.
pub struct LineLogger {
    config: LoggerConfig,
    target: LogTarget,
    handle: Box<dyn Write + Send>,
    threshold: LogLevel,
    line_count: u64,
    last_line: String,
}

macro_rules! leveled {
    ($($(#[$doc:meta])* $name:ident => $level:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&mut self, message: &str, context: &Context) -> Result<()> {
                self.log($level, message, context)
            }
        )*
    };
}

impl LineLogger {
    /// Open a logger writing under `address` (a directory or a `stream://` address).
    ///
    /// The target is resolved once, from today's UTC date for date-derived names.
    pub fn new(address: impl AsRef<Path>, threshold: LogLevel, config: LoggerConfig) -> Result<Self> {
        for warning in validate(&config).warnings {
            warn!(option = %warning.path, message = %warning.message, "Logger config warning");
        }

        let target = LogTarget::resolve(address.as_ref(), &config, Utc::now().date_naive())?;
        let handle = target.open()?;
        debug!(output = %target, threshold = %threshold, "Line logger ready");

        Ok(Self {
            config,
            target,
            handle,
            threshold,
            line_count: 0,
            last_line: String::new(),
        })
    }

    /// Open a logger from a partial options map, merging in the defaults.
    pub fn with_options(
        address: impl AsRef<Path>,
        threshold: LogLevel,
        options: LoggerOptions,
    ) -> Result<Self> {
        Self::new(address, threshold, options.resolve())
    }

    /// Format and append a message if `level` passes the threshold.
    ///
    /// Messages below the threshold are dropped and return `Ok(())`.
    pub fn log(&mut self, level: LogLevel, message: &str, context: &Context) -> Result<()> {
        if !level.passes(self.threshold) {
            return Ok(());
        }
        let record = format_message(&self.config, &Utc::now(), level, message, context);
        self.write(&record)
    }

    leveled! {
        /// System is unusable.
        emergency => LogLevel::Emergency;
        /// Action must be taken immediately.
        alert => LogLevel::Alert;
        critical => LogLevel::Critical;
        error => LogLevel::Error;
        warning => LogLevel::Warning;
        notice => LogLevel::Notice;
        info => LogLevel::Info;
        /// Detailed debug information.
        debug => LogLevel::Debug;
    }

    /// Append `line` verbatim, without timestamp or level.
    pub fn write(&mut self, line: &str) -> Result<()> {
        self.handle
            .write_all(line.as_bytes())
            .map_err(|source| self.write_error(source))?;

        self.last_line = line.trim_end().to_string();
        self.line_count += 1;

        if let Some(every) = self.config.flush_interval() {
            if self.line_count % every == 0 {
                trace!(count = self.line_count, "Periodic flush");
                self.flush()?;
            }
        }
        Ok(())
    }

    /// Force any data held by the target out to the OS.
    pub fn flush(&mut self) -> Result<()> {
        self.handle.flush().map_err(|source| self.write_error(source))
    }

    /// Replace the timestamp pattern. An invalid pattern falls back to the default
    /// when records are formatted, as it does when passed at construction.
    pub fn set_date_format(&mut self, format: impl Into<String>) {
        let format = format.into();
        if !is_valid_date_format(&format) {
            warn!(pattern = %format, "Invalid date format; the default is used");
        }
        self.config.date_format = format;
    }

    pub fn set_log_level_threshold(&mut self, threshold: LogLevel) {
        self.threshold = threshold;
    }

    /// Resolved file path, or the stream address for stream targets.
    pub fn log_file_path(&self) -> &Path {
        self.target.as_path()
    }

    /// The last record written, trailing whitespace trimmed.
    pub fn last_log_line(&self) -> &str {
        &self.last_line
    }

    /// Number of records written by this instance.
    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    pub fn target(&self) -> &LogTarget {
        &self.target
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    fn write_error(&self, source: std::io::Error) -> LogError {
        LogError::Write {
            path: self.target.as_path().to_path_buf(),
            source,
        }
    }
}

impl fmt::Debug for LineLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineLogger")
            .field("target", &self.target)
            .field("threshold", &self.threshold)
            .field("line_count", &self.line_count)
            .finish_non_exhaustive()
    }
}

impl Drop for LineLogger {
    fn drop(&mut self) {
        if let Err(e) = self.handle.flush() {
            warn!(output = %self.target, error = %e, "Failed to flush log target on close");
        }
    }
}
