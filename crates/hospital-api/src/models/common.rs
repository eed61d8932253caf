//! Shared model types: addresses, id/name references, mutation responses.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Categories a doctor can belong to.
pub const DOCTOR_CATEGORIES: [&str; 3] = ["Medicine", "Surgery", "Radiologist"];

/// A postal address, sent flattened alongside the owning entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub county: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zipcode: String,
}

impl Address {
    /// Single-line rendering, matching the server's formatted_address.
    pub fn formatted(&self) -> String {
        format!(
            "{}, {}, {}, {}, {} - {}",
            self.street, self.county, self.city, self.state, self.country, self.zipcode
        )
    }
}

/// An id/name pair used to populate selection lists and resolve names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRef {
    pub id: i64,
    pub name: String,
}

/// The envelope every mutation endpoint answers with.
///
/// On success the server may include the id of a created record. On failure it
/// carries a human-readable reason in either `message` or `error`, depending
/// on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusResponse {
    /// The rejection reason, whichever field the endpoint used.
    pub fn rejection_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "request rejected by server".to_string())
    }

    /// Converts a `success: false` response into [`ApiError::Rejected`].
    pub fn into_result(self) -> Result<StatusResponse> {
        if self.success {
            Ok(self)
        } else {
            let message = self.rejection_message();
            Err(ApiError::Rejected { message }.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_address_formatted() {
        let address = Address {
            street: "12 Main St".to_string(),
            county: "Kings".to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            country: "USA".to_string(),
            zipcode: "11201".to_string(),
        };
        assert_eq!(address.formatted(), "12 Main St, Kings, Brooklyn, NY, USA - 11201");
    }

    #[test]
    fn test_status_success_passes_through() {
        let status = StatusResponse {
            success: true,
            id: Some(5),
            message: None,
            error: None,
        };
        let status = status.into_result().unwrap();
        assert_eq!(status.id, Some(5));
    }

    #[test]
    fn test_status_failure_uses_message_field() {
        let status = StatusResponse {
            success: false,
            id: None,
            message: Some("Department already exists".to_string()),
            error: None,
        };
        match status.into_result() {
            Err(Error::Api(ApiError::Rejected { message })) => {
                assert_eq!(message, "Department already exists");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_status_failure_falls_back_to_error_field() {
        let status = StatusResponse {
            success: false,
            id: None,
            message: None,
            error: Some("Email already exists".to_string()),
        };
        match status.into_result() {
            Err(Error::Api(ApiError::Rejected { message })) => {
                assert_eq!(message, "Email already exists");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_status_decodes_minimal_body() {
        let status: StatusResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(status.success);
        assert_eq!(status.id, None);
    }
}
