//! Log target resolution and opening.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::config::LoggerConfig;
use crate::error::{LogError, Result};

/// Reserved address scheme selecting a process stream instead of a directory.
pub const STREAM_SCHEME: &str = "stream://";

/// File suffixes that suppress appending the configured extension.
const LOG_SUFFIXES: [&str; 2] = [".log", ".txt"];

/// A standard stream of the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Full reserved address of the stream, e.g. `stream://stdout`.
    pub fn address(self) -> &'static str {
        match self {
            Stream::Stdout => "stream://stdout",
            Stream::Stderr => "stream://stderr",
        }
    }

    fn parse(address: &str) -> Result<Self> {
        match address.strip_prefix(STREAM_SCHEME) {
            Some("stdout") => Ok(Stream::Stdout),
            Some("stderr") => Ok(Stream::Stderr),
            _ => Err(LogError::UnknownStream(address.to_string())),
        }
    }
}

/// Where a logger's records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stream(Stream),
}

impl LogTarget {
    /// Resolve the target for `address` under `config`, naming date-derived files
    /// after `today`.
    pub fn resolve(address: &Path, config: &LoggerConfig, today: NaiveDate) -> Result<Self> {
        if let Some(raw) = address.to_str().filter(|a| a.starts_with(STREAM_SCHEME)) {
            return Stream::parse(raw).map(LogTarget::Stream);
        }
        Ok(LogTarget::File(address.join(file_name(config, today))))
    }

    /// The resolved file path, or the stream address for stream targets.
    pub fn as_path(&self) -> &Path {
        match self {
            LogTarget::File(path) => path,
            LogTarget::Stream(stream) => Path::new(stream.address()),
        }
    }

    /// Prepare the directory and acquire a write handle.
    pub(crate) fn open(&self) -> Result<Box<dyn Write + Send>> {
        match self {
            LogTarget::Stream(Stream::Stdout) => Ok(Box::new(io::stdout())),
            LogTarget::Stream(Stream::Stderr) => Ok(Box::new(io::stderr())),
            LogTarget::File(path) => Ok(Box::new(open_file(path)?)),
        }
    }
}

impl fmt::Display for LogTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path().display())
    }
}

/// File name for `config`: the explicit filename when set, otherwise
/// `prefix + YYYY-MM-DD + "." + extension`.
pub fn file_name(config: &LoggerConfig, today: NaiveDate) -> String {
    match &config.filename {
        Some(name) if LOG_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) => name.clone(),
        Some(name) => format!("{name}.{}", config.extension),
        None => format!(
            "{}{}.{}",
            config.prefix,
            today.format("%Y-%m-%d"),
            config.extension
        ),
    }
}

fn open_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| LogError::CreateDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
            debug!(dir = %dir.display(), "Created log directory");
        }
    }

    if let Ok(meta) = fs::metadata(path) {
        if meta.permissions().readonly() {
            return Err(LogError::NotWritable {
                path: path.to_path_buf(),
            });
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), "Opened log file");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn date_derived_name() {
        assert_eq!(file_name(&LoggerConfig::default(), day()), "log_2024-03-09.txt");

        let config = LoggerConfig {
            prefix: "error_".to_string(),
            extension: "log".to_string(),
            ..Default::default()
        };
        assert_eq!(file_name(&config, day()), "error_2024-03-09.log");
    }

    #[test]
    fn explicit_filename_gets_extension() {
        let config = LoggerConfig {
            filename: Some("custom".to_string()),
            extension: "log".to_string(),
            ..Default::default()
        };
        let target = LogTarget::resolve(Path::new("/var/log/app"), &config, day()).unwrap();
        assert_eq!(target.as_path(), Path::new("/var/log/app/custom.log"));
    }

    #[test]
    fn explicit_filename_with_log_suffix_is_kept() {
        for name in ["custom.log", "custom.txt"] {
            let config = LoggerConfig {
                filename: Some(name.to_string()),
                extension: "log".to_string(),
                ..Default::default()
            };
            assert_eq!(file_name(&config, day()), name);
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let config = LoggerConfig::default();
        let first = LogTarget::resolve(Path::new("logs"), &config, day()).unwrap();
        let second = LogTarget::resolve(Path::new("logs"), &config, day()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn stream_addresses() {
        let config = LoggerConfig::default();
        let target = LogTarget::resolve(Path::new("stream://stdout"), &config, day()).unwrap();
        assert_eq!(target, LogTarget::Stream(Stream::Stdout));
        assert_eq!(target.as_path(), Path::new("stream://stdout"));

        let err = LogTarget::resolve(Path::new("stream://printer"), &config, day()).unwrap_err();
        assert!(matches!(err, LogError::UnknownStream(_)));
    }

    #[test]
    fn read_only_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locked.log");
        fs::write(&path, "").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();

        let err = LogTarget::File(path).open().err().unwrap();
        assert!(matches!(err, LogError::NotWritable { .. }));
    }

    #[test]
    fn missing_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/app.log");
        LogTarget::File(path.clone()).open().unwrap();
        assert!(path.exists());
    }
}
