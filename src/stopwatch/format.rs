//! Duration and wall-clock formatting for the labels, lap rows, and export.

use chrono::{DateTime, Local};

/// Format milliseconds as `HH:MM:SS` (the main elapsed label).
pub fn format_hms(ms: u64) -> String {
    let total_secs = ms / 1000;
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Format milliseconds as `MM:SS.mmm` (lap durations in the ledger rows).
///
/// Minutes are not wrapped at the hour, so a 61-minute lap reads `61:xx.xxx`.
pub fn format_lap(ms: u64) -> String {
    let total_secs = ms / 1000;
    let m = total_secs / 60;
    let s = total_secs % 60;
    format!("{:02}:{:02}.{:03}", m, s, ms % 1000)
}

/// Format a wall-clock moment as `HH:MM:SS AM/PM` (12-hour).
pub fn format_wall_clock(at: DateTime<Local>) -> String {
    at.format("%I:%M:%S %p").to_string()
}
