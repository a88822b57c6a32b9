//! Record formatting: timestamp, layout template and context block.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::config::{DEFAULT_DATE_FORMAT, LoggerConfig};
use crate::context::{Context, context_to_compact, context_to_string, indent_block};
use crate::level::LogLevel;

/// Separator written between the lines of one record and after each record.
pub const LINE_SEPARATOR: &str = "\n";

/// Render `now` with `pattern`, falling back to the default pattern when chrono
/// rejects it.
pub fn format_timestamp(now: &DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_ok() {
        return out;
    }
    warn!(pattern, "Invalid date format; using default");
    now.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Substitute the template placeholders, one after another.
///
/// Replacement is plain text substitution in the order `{date}`, `{level}`,
/// `{level-padding}`, `{priority}`, `{message}`, `{context}`. Text inserted by an
/// earlier step that looks like a later placeholder is replaced as well.
pub fn apply_template(
    template: &str,
    timestamp: &str,
    level: LogLevel,
    message: &str,
    context: &Context,
) -> String {
    let parts = [
        ("{date}", timestamp.to_string()),
        ("{level}", level.as_str().to_uppercase()),
        ("{level-padding}", level.padding()),
        ("{priority}", level.priority().to_string()),
        ("{message}", message.to_string()),
        ("{context}", context_to_compact(context)),
    ];
    parts
        .iter()
        .fold(template.to_string(), |acc, (placeholder, value)| {
            acc.replace(placeholder, value)
        })
}

/// Build the complete text appended for one log call, trailing separator included.
pub fn format_message(
    config: &LoggerConfig,
    now: &DateTime<Utc>,
    level: LogLevel,
    message: &str,
    context: &Context,
) -> String {
    let timestamp = format_timestamp(now, &config.date_format);

    let mut record = match &config.log_format {
        Some(template) => apply_template(template, &timestamp, level, message, context),
        None => format!("[{timestamp}] [{level}] {message}"),
    };

    if config.append_context && !context.is_empty() {
        record.push_str(LINE_SEPARATOR);
        record.push_str(&indent_block(&context_to_string(context)));
    }

    record.push_str(LINE_SEPARATOR);
    record
}
