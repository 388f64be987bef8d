//! Log records and their single-line text format
//!
//! A record is rendered as `LEVEL:LOGGER_NAME:TIMESTAMP:MESSAGE`, for example
//! `INFO:__main__:2024-05-01 09:30:12,345:Square : 10  = 100`.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDateTime, SubsecRound};

use super::level::Level;

/// `chrono` format string for the timestamp field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Rendered timestamp width, e.g. `2024-05-01 09:30:12,345`
const TIMESTAMP_LEN: usize = 23;

/// A single log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Severity of the event
    pub level: Level,
    /// Name of the logger that produced the event
    pub logger_name: String,
    /// Local wall-clock time of emission, millisecond precision
    pub timestamp: NaiveDateTime,
    /// Free-form message text
    pub message: String,
}

impl LogRecord {
    /// Create a record stamped with the current local time
    ///
    /// The timestamp is truncated to whole milliseconds, the precision the
    /// line format carries.
    #[must_use]
    pub fn now(level: Level, logger_name: &str, message: &str) -> Self {
        Self {
            level,
            logger_name: logger_name.to_string(),
            timestamp: Local::now().naive_local().trunc_subsecs(3),
            message: message.to_string(),
        }
    }

    /// Render the record as one line, without the trailing newline
    #[must_use]
    pub fn format_line(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.level,
            self.logger_name,
            self.timestamp.format(TIMESTAMP_FORMAT),
            escape_message(&self.message)
        )
    }

    /// Parse a line previously produced by [`LogRecord::format_line`]
    pub fn parse_line(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);

        // Level and logger name never contain ':'
        let Some((level, rest)) = line.split_once(':') else {
            bail!("Malformed log line: missing level field");
        };
        let level: Level = level.parse()?;

        let Some((logger_name, rest)) = rest.split_once(':') else {
            bail!("Malformed log line: missing logger name field");
        };
        if logger_name.is_empty() {
            bail!("Malformed log line: empty logger name");
        }

        // The timestamp has colons of its own, so take it by width
        let Some(timestamp) = rest.get(..TIMESTAMP_LEN) else {
            bail!("Malformed log line: truncated timestamp");
        };
        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
            .with_context(|| format!("Malformed log line: bad timestamp '{timestamp}'"))?;

        // Everything after the separator is the message, colons included
        let Some(message) = rest[TIMESTAMP_LEN..].strip_prefix(':') else {
            bail!("Malformed log line: missing ':' after timestamp");
        };

        Ok(Self {
            level,
            logger_name: logger_name.to_string(),
            timestamp,
            message: unescape_message(message),
        })
    }
}

/// Keep a message on a single line.
fn escape_message(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape_message(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_test_record;

    #[test]
    fn test_format_line_field_order() {
        let record = make_test_record(Level::Info, "Square : 10  = 100");
        assert_eq!(
            record.format_line(),
            "INFO:__main__:2024-05-01 09:30:12,345:Square : 10  = 100"
        );
    }

    #[test]
    fn test_timestamp_has_millisecond_comma() {
        let record = make_test_record(Level::Info, "x");
        let line = record.format_line();
        let timestamp = &line["INFO:__main__:".len().."INFO:__main__:".len() + TIMESTAMP_LEN];
        assert_eq!(timestamp, "2024-05-01 09:30:12,345");
    }

    #[test]
    fn test_parse_line_recovers_record() {
        let record = make_test_record(Level::Warning, "disk: almost full");
        let parsed = LogRecord::parse_line(&record.format_line()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_fresh_record_parses_back_unchanged() {
        let record = LogRecord::now(Level::Info, "__main__", "Square : 10  = 100");
        let parsed = LogRecord::parse_line(&record.format_line()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_now_truncates_to_milliseconds() {
        use chrono::Timelike;

        let record = LogRecord::now(Level::Debug, "app", "tick");
        assert_eq!(record.timestamp.nanosecond() % 1_000_000, 0);
    }

    #[test]
    fn test_message_with_colons_is_kept_whole() {
        let parsed =
            LogRecord::parse_line("ERROR:worker:2024-05-01 09:30:12,345:a:b:c").unwrap();
        assert_eq!(parsed.level, Level::Error);
        assert_eq!(parsed.logger_name, "worker");
        assert_eq!(parsed.message, "a:b:c");
    }

    #[test]
    fn test_empty_message_is_allowed() {
        let parsed = LogRecord::parse_line("INFO:app:2024-05-01 09:30:12,345:").unwrap();
        assert!(parsed.message.is_empty());
    }

    #[test]
    fn test_multiline_message_stays_on_one_line() {
        let record = make_test_record(Level::Error, "first\nsecond\\third\r");
        let line = record.format_line();

        assert_eq!(line.lines().count(), 1);
        assert!(line.ends_with("first\\nsecond\\\\third\\r"));

        let parsed = LogRecord::parse_line(&line).unwrap();
        assert_eq!(parsed.message, "first\nsecond\\third\r");
    }

    #[test]
    fn test_parse_line_trailing_newline() {
        let parsed = LogRecord::parse_line("INFO:app:2024-05-01 09:30:12,345:hi\n").unwrap();
        assert_eq!(parsed.message, "hi");
    }

    #[test]
    fn test_reject_unknown_level() {
        let err = LogRecord::parse_line("LOUD:app:2024-05-01 09:30:12,345:hi").unwrap_err();
        assert!(err.to_string().contains("Unknown log level"));
    }

    #[test]
    fn test_reject_missing_fields() {
        let err = LogRecord::parse_line("INFO").unwrap_err();
        assert!(err.to_string().contains("missing level"));

        let err = LogRecord::parse_line("INFO:app").unwrap_err();
        assert!(err.to_string().contains("missing logger name"));
    }

    #[test]
    fn test_reject_truncated_timestamp() {
        let err = LogRecord::parse_line("INFO:app:2024-05-01").unwrap_err();
        assert!(err.to_string().contains("truncated timestamp"));
    }

    #[test]
    fn test_reject_bad_timestamp() {
        let err = LogRecord::parse_line("INFO:app:not a timestamp at all!!:hi").unwrap_err();
        assert!(err.to_string().contains("bad timestamp"));
    }

    #[test]
    fn test_reject_missing_separator_after_timestamp() {
        let err = LogRecord::parse_line("INFO:app:2024-05-01 09:30:12,345 hi").unwrap_err();
        assert!(err.to_string().contains("after timestamp"));
    }
}
