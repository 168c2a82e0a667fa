/*
[INPUT]:  Error sources (HTTP transport, API status, serialization, configuration)
[OUTPUT]: Structured error type for every client operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the OneSignal client
#[derive(Error, Debug)]
pub enum OneSignalError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Client could not be configured (bad key, bad base URL, TLS setup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Notification rejected locally before sending
    #[error("Invalid notification: {0}")]
    InvalidNotification(String),
}

impl OneSignalError {
    /// Create an API error from status code and raw body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        OneSignalError::Api {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            OneSignalError::Api { status, .. } => Some(*status),
            OneSignalError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the API rejected the credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Result type alias for OneSignal operations
pub type Result<T> = std::result::Result<T, OneSignalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = OneSignalError::api_error(StatusCode::BAD_REQUEST, r#"{"errors":["bad"]}"#);
        match err {
            OneSignalError::Api { status, ref body } => {
                assert_eq!(status, 400);
                assert_eq!(body, r#"{"errors":["bad"]}"#);
            }
            _ => panic!("Expected Api error variant"),
        }
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(OneSignalError::api_error(StatusCode::UNAUTHORIZED, "").is_auth_error());
        assert!(OneSignalError::api_error(StatusCode::FORBIDDEN, "").is_auth_error());
        assert!(!OneSignalError::Config("bad key".to_string()).is_auth_error());
    }

    #[test]
    fn test_error_display() {
        let err = OneSignalError::InvalidNotification("contents must include \"en\"".into());
        assert_eq!(
            err.to_string(),
            "Invalid notification: contents must include \"en\""
        );
    }
}
