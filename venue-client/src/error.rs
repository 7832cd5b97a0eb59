//! Client error types

use http::StatusCode;
use thiserror::Error;

/// Client error type
///
/// Non-2xx responses are not classified further: every one of them is a
/// `Status` failure.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connectivity or transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Network response was not ok ({status})")]
    Status { status: StatusCode, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ClientError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        };
        assert_eq!(
            err.to_string(),
            "Network response was not ok (500 Internal Server Error)"
        );
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_non_status_errors_have_no_status() {
        let err = ClientError::InvalidResponse("truncated".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Invalid response: truncated");
    }
}
