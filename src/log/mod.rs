//! Logging sink
//!
//! Leveled, timestamped text lines appended to a local file, one line per
//! event in the form `LEVEL:LOGGER_NAME:TIMESTAMP:MESSAGE`.

pub mod file;
pub mod level;
pub mod record;

pub use file::{read_records, FileLogger};
pub use level::Level;
pub use record::LogRecord;
