//! Driver: configure the sink, compute, emit one record

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Settings;
use crate::log::file::report_emit_error;
use crate::log::{FileLogger, Level};
use crate::square::{square, square_message};

/// What happened to the record a run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Appended to the log file
    Written,
    /// Dropped by the configured level
    BelowLevel,
    /// The write failed and was reported on stderr
    Failed,
}

/// What a single run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number that was squared
    pub input: i64,
    /// Its square
    pub square: i128,
    /// Level the result was logged at
    pub level: Level,
    /// Logged message text
    pub message: String,
    /// File the record went to
    pub log_path: PathBuf,
    /// Line appended to the file, if any
    pub line: Option<String>,
    /// Outcome of the write
    pub delivery: Delivery,
}

impl RunSummary {
    /// Whether the line actually reached the log file
    #[must_use]
    pub const fn recorded(&self) -> bool {
        matches!(self.delivery, Delivery::Written)
    }
}

/// Open the logger, square the configured input and log the result at INFO
///
/// # Errors
/// Returns an error if the settings are invalid or the log file cannot be
/// opened. Failures while writing the record are reported on stderr only.
pub fn run(settings: &Settings) -> Result<RunSummary> {
    settings.validate()?;

    let logger = FileLogger::open(
        &settings.logger.name,
        settings.logger.level,
        &settings.logger.file,
    )?;

    let input = settings.compute.input;
    let squared = square(input);
    let message = square_message(input, squared);

    let (line, delivery) = match logger.try_emit(Level::Info, &message) {
        Ok(Some(line)) => (Some(line), Delivery::Written),
        Ok(None) => (None, Delivery::BelowLevel),
        Err(err) => {
            report_emit_error(&err, &message);
            (None, Delivery::Failed)
        }
    };

    Ok(RunSummary {
        input,
        square: squared,
        level: Level::Info,
        message,
        log_path: logger.log_path().to_path_buf(),
        line,
        delivery,
    })
}
