//! Patient endpoints.

use crate::client::{named_not_found, HospitalClient};
use crate::error::Result;
use crate::models::{NameRef, Patient, StatusResponse};

impl HospitalClient {
    /// Fetches all patients as full records.
    pub async fn list_patients(&self) -> Result<Vec<Patient>> {
        self.get("/get_patients_full").await
    }

    /// Fetches the id/name refs used to populate patient selects.
    pub async fn patient_refs(&self) -> Result<Vec<NameRef>> {
        self.get("/get_patients").await
    }

    /// Fetches a single patient by id.
    pub async fn get_patient(&self, id: i64) -> Result<Patient> {
        self.get(&format!("/get_patient/{id}"))
            .await
            .map_err(named_not_found("patient", id))
    }

    /// Creates a patient. The returned status carries the new record's id.
    pub async fn add_patient(&self, patient: &Patient) -> Result<StatusResponse> {
        self.post_mutation("/add_patient", patient).await
    }

    /// Updates an existing patient.
    pub async fn edit_patient(&self, id: i64, patient: &Patient) -> Result<StatusResponse> {
        self.post_mutation(&format!("/edit_patient/{id}"), patient)
            .await
            .map_err(named_not_found("patient", id))
    }

    /// Deletes a patient.
    pub async fn delete_patient(&self, id: i64) -> Result<StatusResponse> {
        self.post_empty_mutation(&format!("/delete_patient/{id}"))
            .await
            .map_err(named_not_found("patient", id))
    }
}
