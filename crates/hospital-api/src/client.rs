//! HTTP client wrapper for the hospital admin server.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ApiError, Error, Result};
use crate::models::StatusResponse;

/// Default base URL for a locally running hospital admin server.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Client for the hospital admin server's JSON endpoints.
#[derive(Clone)]
pub struct HospitalClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl HospitalClient {
    /// Creates a new client pointed at the given server base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Returns a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET request to the given endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - The endpoint path (e.g., "/get_doctor/3")
    ///
    /// # Returns
    /// The deserialized response body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Performs a POST request to the given endpoint with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Performs a POST request without a body (delete endpoints take none).
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http_client
            .post(&url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// POSTs a mutation and checks the `success` flag in the response.
    ///
    /// Every mutation endpoint answers `{success, id?, message?/error?}`.
    /// A `success: false` answer becomes [`ApiError::Rejected`] carrying the
    /// server's message, so rejections always surface to the caller.
    pub(crate) async fn post_mutation<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<StatusResponse> {
        let status: StatusResponse = self.post(endpoint, body).await?;
        status.into_result()
    }

    /// Like [`Self::post_mutation`] but for body-less mutations (deletes).
    pub(crate) async fn post_empty_mutation(&self, endpoint: &str) -> Result<StatusResponse> {
        let status: StatusResponse = self.post_empty(endpoint).await?;
        status.into_result()
    }

    /// Handles the HTTP response, converting it to our error types.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.json::<T>().await?;
            return Ok(body);
        }

        Err(self.parse_error_response(response).await)
    }

    /// Parses an error response into our error types.
    async fn parse_error_response(&self, response: reqwest::Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        let message = response.text().await.unwrap_or_default();

        let api_error = match status_code {
            404 => ApiError::NotFound {
                resource: "resource".to_string(),
                id: "unknown".to_string(),
            },
            _ => ApiError::Http {
                status: status_code,
                message: if message.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    message
                },
            },
        };

        Error::Api(api_error)
    }
}

impl Default for HospitalClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl fmt::Debug for HospitalClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HospitalClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Classifies a send failure: connection and timeout problems become
/// [`ApiError::Network`], everything else stays a request error.
fn transport_error(err: reqwest::Error) -> Error {
    if err.is_connect() || err.is_timeout() {
        Error::Api(ApiError::Network {
            message: err.to_string(),
        })
    } else {
        Error::Request(err)
    }
}

/// Rewrites a bare 404 into a named NotFound for the given resource.
pub(crate) fn named_not_found(resource: &'static str, id: i64) -> impl FnOnce(Error) -> Error {
    move |err| match err {
        Error::Api(ApiError::NotFound { .. }) => Error::Api(ApiError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test: HospitalClient::new() should accept a base URL
    #[test]
    fn test_client_new_accepts_base_url() {
        let client = HospitalClient::new("http://hospital.example.com");
        assert_eq!(client.base_url(), "http://hospital.example.com");
    }

    // Test: trailing slashes are stripped so endpoint joins stay clean
    #[test]
    fn test_client_strips_trailing_slash() {
        let client = HospitalClient::new("http://hospital.example.com/");
        assert_eq!(client.base_url(), "http://hospital.example.com");
    }

    // Test: default client points at the local dev server
    #[test]
    fn test_client_default_base_url() {
        let client = HospitalClient::default();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    // Test: HospitalClient should implement Clone
    #[test]
    fn test_client_is_clone() {
        let client = HospitalClient::default();
        let _cloned = client.clone();
    }

    // Test: HospitalClient should implement Debug
    #[test]
    fn test_client_is_debug() {
        let client = HospitalClient::default();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("HospitalClient"));
    }

    #[test]
    fn test_named_not_found_rewrites_resource() {
        let err = Error::Api(ApiError::NotFound {
            resource: "resource".to_string(),
            id: "unknown".to_string(),
        });
        let err = named_not_found("nurse", 9)(err);
        match err {
            Error::Api(ApiError::NotFound { resource, id }) => {
                assert_eq!(resource, "nurse");
                assert_eq!(id, "9");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_named_not_found_leaves_other_errors() {
        let err = Error::Api(ApiError::Rejected {
            message: "nope".to_string(),
        });
        let err = named_not_found("nurse", 9)(err);
        assert!(matches!(err, Error::Api(ApiError::Rejected { .. })));
    }
}
