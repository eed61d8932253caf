//! Doctor, patient, nurse and department models.

use serde::{Deserialize, Serialize};

use super::{Address, NameRef};

/// A doctor record as returned by `/get_doctor/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Present in list responses, absent from single-record fetches where the
    /// caller already knows the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,
    pub phone: String,
    pub email: String,
    pub department_id: i64,

    /// One of [`super::DOCTOR_CATEGORIES`].
    pub category: String,

    /// Years of experience.
    pub experience: i32,

    pub degree: String,

    #[serde(flatten)]
    pub address: Address,
}

/// A patient record as returned by `/get_patient/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,
    pub phone: String,
    pub email: String,

    #[serde(flatten)]
    pub address: Address,
}

/// A nurse record. Nurses are assigned to a supervising doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nurse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,
    pub phone: String,
    pub email: String,
    pub doctor_id: i64,

    #[serde(flatten)]
    pub address: Address,
}

/// Response of `/get_nurse/{id}`: the nurse plus doctor refs for the
/// assignment select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NurseDetail {
    pub nurse: Nurse,
    pub doctors: Vec<NameRef>,
}

/// A hospital department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,
}
