//! Terminal summary for a run
//!
//! All output goes to stderr so stdout remains clean for piping.

use colored::{ColoredString, Colorize};

use crate::log::Level;
use crate::run::{Delivery, RunSummary};

/// Level name colored by severity
#[must_use]
pub fn colored_level(level: Level) -> ColoredString {
    match level {
        Level::Debug => level.as_str().dimmed(),
        Level::Info => level.as_str().green(),
        Level::Warning => level.as_str().yellow(),
        Level::Error => level.as_str().red(),
        Level::Critical => level.as_str().red().bold(),
    }
}

/// Short description of where the record ended up, without color
#[must_use]
pub fn delivery_note(summary: &RunSummary) -> String {
    match summary.delivery {
        Delivery::Written => format!("-> {}", summary.log_path.display()),
        Delivery::BelowLevel => "(below configured level, not written)".to_string(),
        Delivery::Failed => format!(
            "(write to {} failed, not written)",
            summary.log_path.display()
        ),
    }
}

/// Print the run summary to stderr
pub fn render_run_summary(summary: &RunSummary) {
    let note = delivery_note(summary);
    match summary.delivery {
        Delivery::Written => eprintln!(
            "{} {} {}",
            colored_level(summary.level),
            summary.message.bold(),
            note.dimmed()
        ),
        Delivery::BelowLevel => eprintln!(
            "{} {} {}",
            colored_level(summary.level).dimmed(),
            summary.message,
            note.dimmed()
        ),
        Delivery::Failed => eprintln!(
            "{} {} {}",
            colored_level(summary.level).dimmed(),
            summary.message,
            note.red().bold()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_summary(delivery: Delivery) -> RunSummary {
        RunSummary {
            input: 10,
            square: 100,
            level: Level::Info,
            message: "Square : 10  = 100".to_string(),
            log_path: PathBuf::from("sq_new.log"),
            line: (delivery == Delivery::Written).then(|| {
                "INFO:__main__:2024-05-01 09:30:12,345:Square : 10  = 100".to_string()
            }),
            delivery,
        }
    }

    #[test]
    fn test_delivery_note_written_names_file() {
        assert_eq!(delivery_note(&make_summary(Delivery::Written)), "-> sq_new.log");
    }

    #[test]
    fn test_delivery_note_below_level() {
        let note = delivery_note(&make_summary(Delivery::BelowLevel));
        assert!(note.contains("below configured level"));
        assert!(note.contains("not written"));
    }

    #[test]
    fn test_delivery_note_failed_write_is_not_claimed_as_written() {
        let note = delivery_note(&make_summary(Delivery::Failed));
        assert!(note.contains("failed"));
        assert!(note.contains("not written"));
        assert!(!note.starts_with("->"));
    }

    #[test]
    fn test_colored_level_keeps_text() {
        colored::control::set_override(false);
        for level in Level::ALL {
            assert_eq!(colored_level(level).to_string(), level.as_str());
        }
    }

    // Test that rendering doesn't panic for any outcome
    #[test]
    fn test_render_run_summary_no_panic() {
        render_run_summary(&make_summary(Delivery::Written));
        render_run_summary(&make_summary(Delivery::BelowLevel));
        render_run_summary(&make_summary(Delivery::Failed));
    }
}
