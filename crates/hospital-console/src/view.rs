//! Table views that re-fetch instead of reloading.
//!
//! [`TableView`] owns the row collection and the active [`FilterQuery`], and
//! [`TableView::refresh`] re-fetches just the affected collection, rebuilding
//! the rows and re-applying the filter that was in force.

use chrono::NaiveDate;
use hospital_api_rs::client::HospitalClient;
use hospital_api_rs::error::Result;

use crate::filter::{FilterQuery, RowRecord};
use crate::rows::build_rows;

/// Which entity collection a view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Doctors,
    Patients,
    Nurses,
    Departments,
    Appointments,
}

impl EntityKind {
    /// Column headers for the entity's table.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Doctors => &[
                "Name", "Phone", "Email", "Category", "Experience", "Degree", "Address",
            ],
            EntityKind::Patients | EntityKind::Nurses => &["Name", "Phone", "Email", "Address"],
            EntityKind::Departments => &["Name"],
            EntityKind::Appointments => &["Patient", "Doctor", "From", "To", "Notes"],
        }
    }
}

/// One entity table: rows plus the query currently filtering them.
#[derive(Debug, Clone)]
pub struct TableView {
    kind: EntityKind,
    rows: Vec<RowRecord>,
    query: FilterQuery,
}

impl TableView {
    /// Builds a view from rows already in hand.
    pub fn from_rows(kind: EntityKind, rows: Vec<RowRecord>) -> Self {
        let mut view = Self {
            kind,
            rows,
            query: FilterQuery::default(),
        };
        view.reapply();
        view
    }

    /// Fetches the collection and builds a view over it.
    pub async fn load(kind: EntityKind, client: &HospitalClient) -> Result<Self> {
        let rows = fetch_rows(kind, client).await?;
        Ok(Self::from_rows(kind, rows))
    }

    /// Re-fetches the collection, keeping the active query.
    pub async fn refresh(&mut self, client: &HospitalClient) -> Result<()> {
        self.rows = fetch_rows(self.kind, client).await?;
        self.reapply();
        Ok(())
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.kind.headers()
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    /// All rows, hidden ones included.
    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    /// The visible subset, in table order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &RowRecord> {
        self.rows.iter().filter(|row| row.visible)
    }

    /// Updates the free-text constraint and re-filters.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
        self.reapply();
    }

    /// Updates the lower date bound and re-filters.
    pub fn set_from(&mut self, from: Option<NaiveDate>) {
        self.query.from = from;
        self.reapply();
    }

    /// Updates the upper date bound and re-filters.
    pub fn set_to(&mut self, to: Option<NaiveDate>) {
        self.query.to = to;
        self.reapply();
    }

    fn reapply(&mut self) {
        self.query.apply(&mut self.rows);
    }
}

async fn fetch_rows(kind: EntityKind, client: &HospitalClient) -> Result<Vec<RowRecord>> {
    let rows = match kind {
        EntityKind::Doctors => build_rows(&client.list_doctors().await?),
        EntityKind::Patients => build_rows(&client.list_patients().await?),
        EntityKind::Nurses => build_rows(&client.list_nurses().await?),
        EntityKind::Departments => build_rows(&client.list_departments().await?),
        EntityKind::Appointments => build_rows(&client.list_appointments().await?),
    };
    Ok(rows)
}
