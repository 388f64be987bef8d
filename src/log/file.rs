//! Append-only file logger
//!
//! Writes one `LEVEL:LOGGER_NAME:TIMESTAMP:MESSAGE` line per accepted event.
//! The destination file is opened once, in append mode, when the logger is
//! created and stays open for the logger's lifetime.

use anyhow::{bail, Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::level::Level;
use super::record::LogRecord;

/// Named, leveled logger backed by a single file
#[derive(Debug)]
pub struct FileLogger {
    name: String,
    level: Level,
    log_path: PathBuf,
    file: Mutex<File>,
}

impl FileLogger {
    /// Open a logger writing to `log_path`
    ///
    /// # Arguments
    /// * `name` - Logger name written into every line
    /// * `level` - Minimum severity that gets recorded
    /// * `log_path` - Destination file, created if missing, never truncated
    ///
    /// # Errors
    /// Returns an error if the name is not usable in the line format or the
    /// file cannot be opened for appending
    pub fn open<P: AsRef<Path>>(name: &str, level: Level, log_path: P) -> Result<Self> {
        validate_logger_name(name)?;
        let log_path = log_path.as_ref().to_path_buf();

        // Open file in append mode, create if it doesn't exist
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

        Ok(Self {
            name: name.to_string(),
            level,
            log_path,
            file: Mutex::new(file),
        })
    }

    /// Record `message` at `level` if it passes the threshold
    ///
    /// Write failures never reach the caller; they are reported on stderr
    /// and the program carries on.
    pub fn emit(&self, level: Level, message: &str) {
        if let Err(err) = self.try_emit(level, message) {
            report_emit_error(&err, message);
        }
    }

    /// Like [`FileLogger::emit`], but surfaces I/O errors
    ///
    /// # Returns
    /// The line that was written (without its newline), or `None` if the
    /// level gate dropped the record
    pub fn try_emit(&self, level: Level, message: &str) -> Result<Option<String>> {
        if !self.is_enabled_for(level) {
            return Ok(None);
        }

        let line = LogRecord::now(level, &self.name, message).format_line();

        // One write per record so a line is never split
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(format!("{line}\n").as_bytes())
            .with_context(|| format!("Failed to write to log file: {}", self.log_path.display()))?;
        file.flush().context("Failed to flush log file")?;

        Ok(Some(line))
    }

    /// Whether a record at `level` would be written
    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Log at DEBUG
    pub fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    /// Log at INFO
    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    /// Log at WARNING
    pub fn warning(&self, message: &str) {
        self.emit(Level::Warning, message);
    }

    /// Log at ERROR
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    /// Log at CRITICAL
    pub fn critical(&self, message: &str) {
        self.emit(Level::Critical, message);
    }

    /// Logger name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured threshold
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Report a record that could not be written, then let the caller carry on
pub fn report_emit_error(err: &anyhow::Error, message: &str) {
    eprintln!("--- Logging error ---");
    eprintln!("{err:#}");
    eprintln!("Message: {message:?}");
}

/// A logger name becomes the second field of every line, so it must not be
/// empty and must not contain the field separator or a line break.
pub fn validate_logger_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Logger name cannot be empty");
    }
    if name.contains(':') {
        bail!("Invalid logger name '{name}': ':' is the field separator");
    }
    if name.contains(['\n', '\r']) {
        bail!("Invalid logger name {name:?}: line breaks are not allowed");
    }
    Ok(())
}

/// Read every record from a log file, in the order they were written
///
/// A missing file yields an empty vector. Blank lines are skipped.
///
/// # Errors
/// Returns an error if the file cannot be read or any line is malformed
pub fn read_records<P: AsRef<Path>>(log_path: P) -> Result<Vec<LogRecord>> {
    let log_path = log_path.as_ref();

    // Nothing logged yet
    if !log_path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(log_path)
        .with_context(|| format!("Failed to read log file: {}", log_path.display()))?;

    let mut records = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        let record = LogRecord::parse_line(line)
            .with_context(|| format!("Failed to parse line {}", line_num + 1))?;
        records.push(record);
    }

    Ok(records)
}
