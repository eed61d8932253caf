//! Data models for the hospital admin server's JSON surface.

mod appointment;
mod common;
mod people;

pub use appointment::{Appointment, AppointmentDetail, AppointmentSummary};
pub use common::{Address, NameRef, StatusResponse, DOCTOR_CATEGORIES};
pub use people::{Department, Doctor, Nurse, NurseDetail, Patient};
