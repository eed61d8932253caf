//! Error types for the hospital admin API client.

use std::fmt;

/// Errors reported by the hospital admin server or the transport underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// The server answered `success: false` (e.g. duplicate email).
    Rejected { message: String },
    /// Resource not found.
    NotFound { resource: String, id: String },
    /// Network/connection error.
    Network { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::Rejected { message } => write!(f, "Request rejected: {}", message),
            ApiError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            ApiError::Network { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Network { .. } => 3,
            _ => 2,
        }
    }
}

/// Top-level error type for the API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reported by the server.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Transport-level failure from the HTTP client.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Returns the appropriate CLI exit code for this error.
    ///
    /// Transport failures map to 3, everything else to 2. Every transport
    /// error surfaces here; there is no silent failure path.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Api(api) => api.exit_code(),
            // Malformed bodies are a server problem, not a transport one.
            Error::Request(e) if e.is_decode() => 2,
            Error::Request(_) => 3,
            Error::Decode(_) => 2,
        }
    }
}

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, Error>;
