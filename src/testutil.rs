//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use chrono::NaiveDate;

use crate::log::{Level, LogRecord};

/// Create a `LogRecord` from logger `__main__` with a fixed timestamp of
/// `2024-05-01 09:30:12,345`.
#[must_use]
pub fn make_test_record(level: Level, message: &str) -> LogRecord {
    let timestamp = NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_milli_opt(9, 30, 12, 345))
        .expect("valid test timestamp");

    LogRecord {
        level,
        logger_name: "__main__".to_string(),
        timestamp,
        message: message.to_string(),
    }
}
