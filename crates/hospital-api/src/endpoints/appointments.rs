//! Appointment endpoints.

use crate::client::{named_not_found, HospitalClient};
use crate::error::Result;
use crate::models::{Appointment, AppointmentDetail, AppointmentSummary, StatusResponse};

impl HospitalClient {
    /// Fetches all appointments with joined patient/doctor names.
    pub async fn list_appointments(&self) -> Result<Vec<AppointmentSummary>> {
        self.get("/get_appointments").await
    }

    /// Fetches an appointment plus the refs for the edit form's selects.
    pub async fn get_appointment(&self, id: i64) -> Result<AppointmentDetail> {
        self.get(&format!("/get_appointment/{id}"))
            .await
            .map_err(named_not_found("appointment", id))
    }

    /// Creates an appointment. The returned status carries the new record's id.
    pub async fn add_appointment(&self, appointment: &Appointment) -> Result<StatusResponse> {
        self.post_mutation("/add_appointment", appointment).await
    }

    /// Updates an existing appointment.
    pub async fn edit_appointment(
        &self,
        id: i64,
        appointment: &Appointment,
    ) -> Result<StatusResponse> {
        self.post_mutation(&format!("/edit_appointment/{id}"), appointment)
            .await
            .map_err(named_not_found("appointment", id))
    }

    /// Deletes an appointment.
    pub async fn delete_appointment(&self, id: i64) -> Result<StatusResponse> {
        self.post_empty_mutation(&format!("/delete_appointment/{id}"))
            .await
            .map_err(named_not_found("appointment", id))
    }
}
