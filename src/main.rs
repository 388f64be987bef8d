//! squarelog - square a number and log it
//!
//! CLI entry point. With no arguments, squares 10 and appends one INFO line
//! to `sq_new.log`.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use squarelog::cli::render_run_summary;
use squarelog::config::Settings;
use squarelog::log::Level;
use squarelog::run::run;

/// Square a number and append the result to a log file
///
/// Each run appends one `LEVEL:LOGGER_NAME:TIMESTAMP:MESSAGE` line to the
/// destination file.
#[derive(Parser, Debug)]
#[command(name = "squarelog", version, about)]
struct Cli {
    /// Number to square (default 10)
    #[arg(allow_negative_numbers = true)]
    number: Option<i64>,

    /// Path to a squarelog.toml settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file to append to (default sq_new.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Minimum level to record: debug, info, warning, error, critical
    #[arg(long)]
    level: Option<Level>,

    /// Logger name written into each line (default __main__)
    #[arg(long)]
    name: Option<String>,

    /// Do not print a summary to stderr
    #[arg(long, short)]
    quiet: bool,
}

/// Resolve settings: CLI flag, then config file, then built-in default.
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_path(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => Settings::default(),
    };

    if let Some(number) = cli.number {
        settings.compute.input = number;
    }
    if let Some(log_file) = &cli.log_file {
        settings.logger.file.clone_from(log_file);
    }
    if let Some(level) = cli.level {
        settings.logger.level = level;
    }
    if let Some(name) = &cli.name {
        settings.logger.name.clone_from(name);
    }

    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;

    let summary = run(&settings).context("Failed to run")?;

    if !cli.quiet {
        render_run_summary(&summary);
    }

    Ok(())
}
