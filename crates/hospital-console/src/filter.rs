//! Conjunctive search/date-range filtering over rendered table rows.
//!
//! A [`FilterQuery`] is the current combination of free-text and date-bound
//! constraints. It is recomputed on every input event and never persisted;
//! applying it walks the full row collection and toggles each row's
//! visibility in place. There is no incremental diffing: redundant passes are
//! cheap and the result is idempotent.

use chrono::NaiveDate;

/// One rendered table entry: per-column display text plus a visibility flag.
///
/// The appointment date is a named field rather than a positional column, so
/// reordering display columns cannot break range filtering. Rows for entities
/// without a date leave it `None`, as do rows whose source text failed to
/// parse when the row was built; such rows satisfy every date predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord {
    /// Server id of the entity behind the row.
    pub id: i64,

    /// Display text, one entry per visible column.
    pub cells: Vec<String>,

    /// The date used for range filtering, when the row has one.
    pub date: Option<NaiveDate>,

    /// Recomputed on every filter pass.
    pub visible: bool,
}

impl RowRecord {
    /// A row with no date (departments, doctors, ...). Starts visible.
    pub fn new(id: i64, cells: Vec<String>) -> Self {
        Self {
            id,
            cells,
            date: None,
            visible: true,
        }
    }

    /// A row carrying a date for range filtering. Starts visible.
    pub fn with_date(id: i64, cells: Vec<String>, date: Option<NaiveDate>) -> Self {
        Self {
            id,
            cells,
            date,
            visible: true,
        }
    }
}

/// Free-text and date-bound constraints deciding row visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    /// Case-insensitive substring matched against every cell. Empty matches all.
    pub text: String,

    /// Rows with a date earlier than this are hidden.
    pub from: Option<NaiveDate>,

    /// Rows with a date later than this are hidden.
    pub to: Option<NaiveDate>,
}

impl FilterQuery {
    /// A text-only query.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sets the lower date bound.
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the upper date bound.
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.from.is_none() && self.to.is_none()
    }

    /// Tests a single row against all predicates.
    pub fn matches(&self, row: &RowRecord) -> bool {
        self.matches_text(row) && self.matches_date(row)
    }

    /// Recomputes visibility for every row. Full pass, in place, idempotent.
    pub fn apply(&self, rows: &mut [RowRecord]) {
        for row in rows {
            row.visible = self.matches(row);
        }
    }

    fn matches_text(&self, row: &RowRecord) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        row.cells
            .iter()
            .any(|cell| cell.to_lowercase().contains(&needle))
    }

    fn matches_date(&self, row: &RowRecord) -> bool {
        // A row without a date is never excluded by the range predicates.
        let Some(date) = row.date else {
            return true;
        };
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_rows() -> Vec<RowRecord> {
        vec![
            RowRecord::with_date(
                1,
                vec!["Alice".into(), "Cardiology".into(), "2025-01-10".into()],
                Some(date(2025, 1, 10)),
            ),
            RowRecord::with_date(
                2,
                vec!["Bob".into(), "Neurology".into(), "2025-02-15".into()],
                Some(date(2025, 2, 15)),
            ),
        ]
    }

    #[test]
    fn empty_query_shows_every_row() {
        let mut rows = sample_rows();
        FilterQuery::default().apply(&mut rows);
        assert!(rows.iter().all(|r| r.visible));
    }

    #[test]
    fn text_match_is_case_insensitive_substring() {
        let mut rows = sample_rows();
        FilterQuery::text("cardio").apply(&mut rows);
        assert!(rows[0].visible);
        assert!(!rows[1].visible);
    }

    #[test]
    fn text_match_scans_every_cell() {
        let mut rows = sample_rows();
        FilterQuery::text("2025-02").apply(&mut rows);
        assert!(!rows[0].visible);
        assert!(rows[1].visible);
    }

    #[test]
    fn date_range_hides_rows_outside_bounds() {
        let mut rows = sample_rows();
        FilterQuery::default()
            .with_from(date(2025, 2, 1))
            .with_to(date(2025, 3, 1))
            .apply(&mut rows);
        assert!(!rows[0].visible, "date before range should hide the row");
        assert!(rows[1].visible);
    }

    #[test]
    fn from_bound_alone_is_inclusive() {
        let mut rows = sample_rows();
        FilterQuery::default()
            .with_from(date(2025, 1, 10))
            .apply(&mut rows);
        assert!(rows[0].visible, "date equal to the bound stays visible");
        assert!(rows[1].visible);
    }

    #[test]
    fn to_bound_alone_is_inclusive() {
        let mut rows = sample_rows();
        FilterQuery::default()
            .with_to(date(2025, 1, 10))
            .apply(&mut rows);
        assert!(rows[0].visible);
        assert!(!rows[1].visible);
    }

    #[test]
    fn dateless_row_satisfies_date_predicates() {
        let mut rows = vec![RowRecord::new(3, vec!["Cardiology".into()])];
        FilterQuery::default()
            .with_from(date(2025, 1, 1))
            .with_to(date(2025, 12, 31))
            .apply(&mut rows);
        assert!(rows[0].visible);
    }

    #[test]
    fn text_and_date_predicates_are_a_conjunction() {
        let mut rows = sample_rows();
        FilterQuery::text("bob")
            .with_to(date(2025, 1, 31))
            .apply(&mut rows);
        // Bob matches the text but falls after the upper bound.
        assert!(!rows[0].visible);
        assert!(!rows[1].visible);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut rows = sample_rows();
        let query = FilterQuery::text("cardio").with_from(date(2025, 1, 1));
        query.apply(&mut rows);
        let first_pass: Vec<bool> = rows.iter().map(|r| r.visible).collect();
        query.apply(&mut rows);
        let second_pass: Vec<bool> = rows.iter().map(|r| r.visible).collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn relaxing_the_query_restores_hidden_rows() {
        let mut rows = sample_rows();
        FilterQuery::text("cardio").apply(&mut rows);
        assert!(!rows[1].visible);
        FilterQuery::default().apply(&mut rows);
        assert!(rows[1].visible);
    }
}
