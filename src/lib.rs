//! squarelog - square a number and log it
//!
//! Configures a named, leveled file logger, computes the square of an
//! integer and appends the result as one `INFO` line of the form
//! `LEVEL:LOGGER_NAME:TIMESTAMP:MESSAGE`.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod log;
pub mod run;
pub mod square;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use config::Settings;
pub use log::{read_records, FileLogger, Level, LogRecord};
pub use run::{run, Delivery, RunSummary};
pub use square::{square, square_message};
