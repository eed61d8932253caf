//! Common helper functions for output formatting.

use chrono::NaiveDateTime;

/// Maximum width of a rendered cell before truncation.
pub const MAX_CELL_WIDTH: usize = 40;

/// Display width of a cell in characters, capped at the column maximum.
///
/// Counts chars rather than bytes so multibyte cells line up with the
/// char-based padding and truncation.
pub fn display_width(s: &str) -> usize {
    s.chars().count().min(MAX_CELL_WIDTH)
}

/// Truncates a string to a maximum length.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        s.to_string()
    }
}

/// Formats a datetime for display.
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Formats an appointment window for display.
pub fn format_window(from: NaiveDateTime, to: NaiveDateTime) -> String {
    if from.date() == to.date() {
        format!("{} - {}", format_datetime(from), to.format("%H:%M"))
    } else {
        format!("{} - {}", format_datetime(from), format_datetime(to))
    }
}

/// Pads a cell to a column width.
pub fn pad(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}
