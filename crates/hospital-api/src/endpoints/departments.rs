//! Department endpoints.

use crate::client::{named_not_found, HospitalClient};
use crate::error::Result;
use crate::models::{Department, StatusResponse};

impl HospitalClient {
    /// Fetches all departments.
    pub async fn list_departments(&self) -> Result<Vec<Department>> {
        self.get("/get_departments").await
    }

    /// Fetches a single department by id.
    pub async fn get_department(&self, id: i64) -> Result<Department> {
        self.get(&format!("/get_department/{id}"))
            .await
            .map_err(named_not_found("department", id))
    }

    /// Creates a department. The returned status carries the new record's id.
    pub async fn add_department(&self, department: &Department) -> Result<StatusResponse> {
        self.post_mutation("/add_department", department).await
    }

    /// Updates an existing department.
    pub async fn edit_department(&self, id: i64, department: &Department) -> Result<StatusResponse> {
        self.post_mutation(&format!("/edit_department/{id}"), department)
            .await
            .map_err(named_not_found("department", id))
    }

    /// Deletes a department.
    pub async fn delete_department(&self, id: i64) -> Result<StatusResponse> {
        self.post_empty_mutation(&format!("/delete_department/{id}"))
            .await
            .map_err(named_not_found("department", id))
    }
}
