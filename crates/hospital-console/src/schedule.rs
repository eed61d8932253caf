//! Scheduling-constraint validation for appointment time windows.
//!
//! Appointment times are naive wall-clock values, entered in the HTML
//! `datetime-local` form (`2025-05-01T10:00`) and echoed back by the server
//! with seconds (`2025-05-01T10:00:00`). "Now" is sampled once per validation
//! call, never cached, so two calls a moment apart may disagree about a value
//! sitting exactly on the boundary. That is accepted policy.

use chrono::{Duration, Local, NaiveDateTime};

/// Default appointment length, used to derive an end time from a start time.
const SLOT_MINUTES: i64 = 30;

/// Input formats accepted from forms and server responses.
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Errors for time-window construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The window's end does not come after its start.
    #[error("appointment window must end after it starts")]
    EmptyWindow,
}

/// Parses a form or wire datetime value.
///
/// Accepts the minute-precision `datetime-local` form and the seconds-bearing
/// ISO form. Returns `None` for anything else.
pub fn parse_input(value: &str) -> Option<NaiveDateTime> {
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value.trim(), fmt).ok())
}

/// Tests whether `value` parses and is not in the past.
///
/// Returns `false` when the value does not parse, or when the parsed instant
/// is strictly earlier than now. An instant equal to now is valid.
pub fn is_valid_date(value: &str) -> bool {
    is_valid_date_at(value, Local::now().naive_local())
}

/// Pure form of [`is_valid_date`] with an explicit evaluation instant.
pub fn is_valid_date_at(value: &str, now: NaiveDateTime) -> bool {
    match parse_input(value) {
        Some(instant) => instant >= now,
        None => false,
    }
}

/// Derives the default end time for an appointment: start plus 30 minutes.
pub fn derive_end_time(start: NaiveDateTime) -> NaiveDateTime {
    start + Duration::minutes(SLOT_MINUTES)
}

/// A start/end instant pair describing an appointment's scheduled window.
///
/// Ephemeral: built from form input at submit time and discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl TimeRange {
    /// Builds a window, enforcing `to > from`.
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Result<Self, ScheduleError> {
        if to > from {
            Ok(Self { from, to })
        } else {
            Err(ScheduleError::EmptyWindow)
        }
    }

    /// Builds the default window for a start instant: `[start, start + 30m)`.
    pub fn from_start(from: NaiveDateTime) -> Self {
        Self {
            from,
            to: derive_end_time(from),
        }
    }

    /// Length of the window.
    pub fn duration(&self) -> Duration {
        self.to - self.from
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn parses_datetime_local_form() {
        assert_eq!(parse_input("2025-05-01T10:00"), Some(dt(2025, 5, 1, 10, 0)));
    }

    #[test]
    fn parses_server_iso_form_with_seconds() {
        assert_eq!(
            parse_input("2025-05-01T10:00:00"),
            Some(dt(2025, 5, 1, 10, 0))
        );
    }

    #[test]
    fn rejects_garbage_input() {
        assert_eq!(parse_input("next tuesday"), None);
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("2025-13-01T10:00"), None);
    }

    #[test]
    fn past_instants_are_invalid() {
        let now = dt(2025, 5, 1, 10, 0);
        assert!(!is_valid_date_at("2025-05-01T09:59", now));
        assert!(!is_valid_date_at("2024-05-01T10:00", now));
    }

    #[test]
    fn now_and_future_instants_are_valid() {
        let now = dt(2025, 5, 1, 10, 0);
        assert!(is_valid_date_at("2025-05-01T10:00", now));
        assert!(is_valid_date_at("2025-05-01T10:01", now));
        assert!(is_valid_date_at("2026-01-01T00:00", now));
    }

    #[test]
    fn unparseable_input_is_invalid() {
        let now = dt(2025, 5, 1, 10, 0);
        assert!(!is_valid_date_at("not a date", now));
    }

    #[test]
    fn end_time_is_exactly_thirty_minutes_later() {
        let start = dt(2025, 5, 1, 10, 0);
        assert_eq!(derive_end_time(start), dt(2025, 5, 1, 10, 30));

        // Crosses an hour boundary, and a day boundary.
        assert_eq!(derive_end_time(dt(2025, 5, 1, 10, 45)), dt(2025, 5, 1, 11, 15));
        assert_eq!(derive_end_time(dt(2025, 5, 1, 23, 45)), dt(2025, 5, 2, 0, 15));
    }

    #[test]
    fn time_range_requires_end_after_start() {
        let from = dt(2025, 5, 1, 10, 0);
        assert!(TimeRange::new(from, dt(2025, 5, 1, 10, 30)).is_ok());
        assert_eq!(TimeRange::new(from, from), Err(ScheduleError::EmptyWindow));
        assert_eq!(
            TimeRange::new(from, dt(2025, 5, 1, 9, 0)),
            Err(ScheduleError::EmptyWindow)
        );
    }

    #[test]
    fn from_start_uses_default_slot() {
        let range = TimeRange::from_start(dt(2025, 5, 1, 10, 0));
        assert_eq!(range.duration(), Duration::minutes(30));
    }
}
