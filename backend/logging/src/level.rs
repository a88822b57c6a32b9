//! Severity levels and their priorities.

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// Width the level name is padded to by the `{level-padding}` placeholder.
pub const LEVEL_COLUMN_WIDTH: usize = 9;

/// The eight syslog severities, most severe first.
///
/// Ordering follows [`LogLevel::priority`]: `Emergency < Alert < ... < Debug`,
/// so a *smaller* level is a *more severe* one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl LogLevel {
    /// Every level, ordered by priority.
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Emergency,
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// Integer rank of the level; 0 is the most severe.
    pub fn priority(self) -> u8 {
        match self {
            LogLevel::Emergency => 0,
            LogLevel::Alert => 1,
            LogLevel::Critical => 2,
            LogLevel::Error => 3,
            LogLevel::Warning => 4,
            LogLevel::Notice => 5,
            LogLevel::Info => 6,
            LogLevel::Debug => 7,
        }
    }

    /// Lowercase level name as written by the default line layout.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Emergency => "emergency",
            LogLevel::Alert => "alert",
            LogLevel::Critical => "critical",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Notice => "notice",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    /// Spaces that pad the level name out to [`LEVEL_COLUMN_WIDTH`].
    pub fn padding(self) -> String {
        " ".repeat(LEVEL_COLUMN_WIDTH.saturating_sub(self.as_str().len()))
    }

    /// Whether a message at `self` passes a logger whose threshold is `threshold`.
    pub fn passes(self, threshold: LogLevel) -> bool {
        self.priority() <= threshold.priority()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| LogError::UnknownLevel(s.to_string()))
    }
}
