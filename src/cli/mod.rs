//! CLI output formatting
//!
//! Human-readable, colored terminal output for a run.

pub mod display;

pub use display::colored_level;
pub use display::delivery_note;
pub use display::render_run_summary;
