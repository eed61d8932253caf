//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types from the hospital-api crate so
//! library consumers can pull everything in with a single use statement.
//!
//! # Example
//!
//! ```
//! use hospital_api_rs::prelude::*;
//!
//! // Now you have access to:
//! // - HospitalClient (API client)
//! // - Error, ApiError, Result (error handling)
//! // - Doctor, Patient, Nurse, Department, Appointment, ... (data models)
//! ```

// Client types
pub use crate::client::HospitalClient;

// Error types
pub use crate::error::{ApiError, Error, Result};

// Data models
pub use crate::models::{
    Address,
    Appointment,
    AppointmentDetail,
    AppointmentSummary,
    Department,
    Doctor,
    NameRef,
    Nurse,
    NurseDetail,
    Patient,
    StatusResponse,
    DOCTOR_CATEGORIES,
};
