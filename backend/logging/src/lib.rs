//! Leveled, line-oriented logging to local files.
//!
//! A [`LineLogger`] filters messages against a severity threshold, formats them as
//! `[timestamp] [level] message` (or through a placeholder template), appends an
//! indented context block when one is given, and writes the record to a per-day
//! file, an explicitly named file, or a standard stream (`stream://stdout`,
//! `stream://stderr`).
//!
//! ```no_run
//! use linelog::{Context, LineLogger, LogLevel, LoggerConfig};
//!
//! let mut logger = LineLogger::new("logs", LogLevel::Info, LoggerConfig::default())?;
//! logger.info("service started", &Context::new())?;
//! # Ok::<(), linelog::LogError>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod target;
pub mod validation;

pub use config::{LoggerConfig, LoggerOptions, load_options};
pub use context::{Context, context_to_string};
pub use error::{LogError, Result};
pub use level::LogLevel;
pub use logger::LineLogger;
pub use target::{LogTarget, STREAM_SCHEME, Stream};
pub use validation::{ValidationReport, validate};
