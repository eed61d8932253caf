//! Appointment models.
//!
//! Appointment times are wall-clock values without a timezone: the server
//! stores and returns naive ISO datetimes (`2025-05-01T10:00:00`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::NameRef;

/// A scheduled appointment between a patient and a doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub doctor_id: i64,
    pub patient_id: i64,

    /// Scheduled start of the visit.
    pub from_time: NaiveDateTime,

    /// Scheduled end of the visit. Always after `from_time` on well-formed
    /// records; the server enforces the ordering.
    pub to_time: NaiveDateTime,

    #[serde(default)]
    pub notes: String,
}

/// One appointment as listed by `/get_appointments`, with the joined
/// patient and doctor names the listing table displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentSummary {
    pub id: i64,
    pub doctor_id: i64,
    pub patient_id: i64,
    pub doctor_name: String,
    pub patient_name: String,
    pub from_time: NaiveDateTime,
    pub to_time: NaiveDateTime,

    #[serde(default)]
    pub notes: String,
}

/// Response of `/get_appointment/{id}`: the appointment plus the doctor and
/// patient refs needed to populate the edit form's selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDetail {
    pub appointment: Appointment,
    pub doctors: Vec<NameRef>,
    pub patients: Vec<NameRef>,
}
