//! Nurse endpoints.

use crate::client::{named_not_found, HospitalClient};
use crate::error::Result;
use crate::models::{Nurse, NurseDetail, StatusResponse};

impl HospitalClient {
    /// Fetches all nurses.
    pub async fn list_nurses(&self) -> Result<Vec<Nurse>> {
        self.get("/get_nurses").await
    }

    /// Fetches a nurse plus the doctor refs for the assignment select.
    pub async fn get_nurse(&self, id: i64) -> Result<NurseDetail> {
        self.get(&format!("/get_nurse/{id}"))
            .await
            .map_err(named_not_found("nurse", id))
    }

    /// Creates a nurse. The returned status carries the new record's id.
    pub async fn add_nurse(&self, nurse: &Nurse) -> Result<StatusResponse> {
        self.post_mutation("/add_nurse", nurse).await
    }

    /// Updates an existing nurse.
    pub async fn edit_nurse(&self, id: i64, nurse: &Nurse) -> Result<StatusResponse> {
        self.post_mutation(&format!("/edit_nurse/{id}"), nurse)
            .await
            .map_err(named_not_found("nurse", id))
    }

    /// Deletes a nurse.
    pub async fn delete_nurse(&self, id: i64) -> Result<StatusResponse> {
        self.post_empty_mutation(&format!("/delete_nurse/{id}"))
            .await
            .map_err(named_not_found("nurse", id))
    }
}
