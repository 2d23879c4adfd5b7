//! Console error taxonomy

/// Fallback shown when a failure carries no server message
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Standard result type for console operations
pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;

/// Errors surfaced by the session manager and product repository
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    /// The request never completed
    #[error("Network error: {0}")]
    Network(String),

    /// The server rejected the credential or token
    #[error("Unauthorized: {}", .message.as_deref().unwrap_or("credential rejected"))]
    Unauthorized { message: Option<String> },

    /// Any other non-success response
    #[error("Request rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The response body could not be decoded
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Client-side input checks failed
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A protected operation was attempted without a session
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The session token could not be persisted
    #[error("Token storage failed: {0}")]
    Storage(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ConsoleError {
    /// Message supplied by the server in the response body, if any
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for the login banner
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            other => other.server_message().unwrap_or(UNKNOWN_ERROR).to_string(),
        }
    }

    /// Whether the server refused the credential rather than failing
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
