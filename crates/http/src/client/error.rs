//! Client error types

use crate::types::ErrorBody;
use hexadmin_core::ConsoleError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// Server answered 2xx but reported `success: false`
    #[error("Request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code and the raw response body.
    ///
    /// The message is taken from a JSON `{"message": ...}` body; anything
    /// else (proxy error pages, empty bodies) yields no message.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message);
        Self::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// Human-readable message supplied by the server
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the server refused the credential or token
    pub const fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::Status {
                status: 401 | 403,
                ..
            } | Self::Rejected { .. }
        )
    }
}

impl From<ClientError> for ConsoleError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) if e.is_decode() => Self::Decode(e.to_string()),
            ClientError::Request(e) => Self::Network(e.to_string()),
            ClientError::Status {
                status: 401 | 403,
                message,
            }
            | ClientError::Rejected { message } => Self::Unauthorized { message },
            ClientError::Status { status, message } => Self::Rejected { status, message },
            ClientError::Serialization(e) => Self::Decode(e.to_string()),
            ClientError::Configuration(message) => Self::Configuration(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn extracts_json_message() {
        let err = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"success":false,"message":"invalid password"}"#,
        );
        assert_eq!(err.server_message(), Some("invalid password"));
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn non_json_body_has_no_message() {
        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, "<html>Bad gateway</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(
            ConsoleError::from(err),
            ConsoleError::Rejected {
                status: 502,
                message: None
            }
        );
    }

    #[test]
    fn auth_statuses_map_to_unauthorized() {
        let err = ClientError::from_status(
            StatusCode::FORBIDDEN,
            r#"{"success":false,"message":"token expired"}"#,
        );
        assert!(err.is_auth_failure());
        assert_eq!(
            ConsoleError::from(err).user_message(),
            "token expired".to_string()
        );
    }
}
