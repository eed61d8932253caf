//! Doctor endpoints.

use crate::client::{named_not_found, HospitalClient};
use crate::error::Result;
use crate::models::{Doctor, NameRef, StatusResponse};

impl HospitalClient {
    /// Fetches all doctors.
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        self.get("/get_doctors").await
    }

    /// Fetches the id/name refs of the doctors in one department.
    pub async fn doctor_refs_by_department(&self, department_id: i64) -> Result<Vec<NameRef>> {
        self.get(&format!("/get_doctors_by_department/{department_id}"))
            .await
    }

    /// Fetches a single doctor by id.
    pub async fn get_doctor(&self, id: i64) -> Result<Doctor> {
        self.get(&format!("/get_doctor/{id}"))
            .await
            .map_err(named_not_found("doctor", id))
    }

    /// Creates a doctor. The returned status carries the new record's id.
    pub async fn add_doctor(&self, doctor: &Doctor) -> Result<StatusResponse> {
        self.post_mutation("/add_doctor", doctor).await
    }

    /// Updates an existing doctor.
    pub async fn edit_doctor(&self, id: i64, doctor: &Doctor) -> Result<StatusResponse> {
        self.post_mutation(&format!("/edit_doctor/{id}"), doctor)
            .await
            .map_err(named_not_found("doctor", id))
    }

    /// Deletes a doctor.
    pub async fn delete_doctor(&self, id: i64) -> Result<StatusResponse> {
        self.post_empty_mutation(&format!("/delete_doctor/{id}"))
            .await
            .map_err(named_not_found("doctor", id))
    }
}
