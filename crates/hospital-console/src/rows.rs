//! Row builders: entity models to [`RowRecord`]s.

use hospital_api_rs::models::{AppointmentSummary, Department, Doctor, Nurse, Patient};

use crate::filter::RowRecord;

/// Display format for the datetime cells.
const CELL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Conversion of an entity into a table row.
///
/// List responses always carry ids; a record fetched without one falls back
/// to id 0 rather than failing row construction.
pub trait ToRow {
    fn to_row(&self) -> RowRecord;
}

impl ToRow for Doctor {
    fn to_row(&self) -> RowRecord {
        RowRecord::new(
            self.id.unwrap_or_default(),
            vec![
                self.name.clone(),
                self.phone.clone(),
                self.email.clone(),
                self.category.clone(),
                format!("{} yrs", self.experience),
                self.degree.clone(),
                self.address.formatted(),
            ],
        )
    }
}

impl ToRow for Patient {
    fn to_row(&self) -> RowRecord {
        RowRecord::new(
            self.id.unwrap_or_default(),
            vec![
                self.name.clone(),
                self.phone.clone(),
                self.email.clone(),
                self.address.formatted(),
            ],
        )
    }
}

impl ToRow for Nurse {
    fn to_row(&self) -> RowRecord {
        RowRecord::new(
            self.id.unwrap_or_default(),
            vec![
                self.name.clone(),
                self.phone.clone(),
                self.email.clone(),
                self.address.formatted(),
            ],
        )
    }
}

impl ToRow for Department {
    fn to_row(&self) -> RowRecord {
        RowRecord::new(self.id.unwrap_or_default(), vec![self.name.clone()])
    }
}

impl ToRow for AppointmentSummary {
    fn to_row(&self) -> RowRecord {
        RowRecord::with_date(
            self.id,
            vec![
                self.patient_name.clone(),
                self.doctor_name.clone(),
                self.from_time.format(CELL_DATETIME_FORMAT).to_string(),
                self.to_time.format(CELL_DATETIME_FORMAT).to_string(),
                self.notes.clone(),
            ],
            Some(self.from_time.date()),
        )
    }
}

/// Builds rows for a whole collection.
pub fn build_rows<T: ToRow>(items: &[T]) -> Vec<RowRecord> {
    items.iter().map(ToRow::to_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hospital_api_rs::models::Address;

    #[test]
    fn appointment_summary_row_carries_its_date() {
        let summary = AppointmentSummary {
            id: 4,
            doctor_id: 1,
            patient_id: 2,
            doctor_name: "Dr. Grey".to_string(),
            patient_name: "Alice".to_string(),
            from_time: NaiveDate::from_ymd_opt(2025, 1, 10)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            to_time: NaiveDate::from_ymd_opt(2025, 1, 10)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            notes: "checkup".to_string(),
        };

        let row = summary.to_row();
        assert_eq!(row.id, 4);
        assert_eq!(row.date, Some(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
        assert_eq!(row.cells[0], "Alice");
        assert_eq!(row.cells[2], "2025-01-10 09:00");
        assert!(row.visible);
    }

    #[test]
    fn department_row_has_no_date() {
        let department = Department {
            id: Some(2),
            name: "Cardiology".to_string(),
        };
        let row = department.to_row();
        assert_eq!(row.date, None);
        assert_eq!(row.cells, vec!["Cardiology".to_string()]);
    }

    #[test]
    fn build_rows_preserves_order() {
        let departments = vec![
            Department {
                id: Some(1),
                name: "Cardiology".to_string(),
            },
            Department {
                id: Some(2),
                name: "Neurology".to_string(),
            },
        ];
        let rows = build_rows(&departments);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[1].id, 2);
    }

    #[test]
    fn patient_row_includes_formatted_address() {
        let patient = Patient {
            id: Some(9),
            name: "Alice".to_string(),
            phone: "123".to_string(),
            email: "alice@example.test".to_string(),
            address: Address {
                street: "12 Main St".to_string(),
                county: "Kings".to_string(),
                city: "Brooklyn".to_string(),
                state: "NY".to_string(),
                country: "USA".to_string(),
                zipcode: "11201".to_string(),
            },
        };
        let row = patient.to_row();
        assert!(row.cells[3].contains("Brooklyn"));
    }
}
