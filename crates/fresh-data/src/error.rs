//! API error taxonomy.
//!
//! Every request resolves to `Result<T, ApiError>`; nothing in this crate
//! panics or leaks a transport-level error type past the crate boundary.

use serde::Deserialize;
use thiserror::Error;

/// Fallback message when the server gives no usable body.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Normalized failure for any API call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response. `message` is the server's message, verbatim,
    /// when the body carried one.
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// 401/403 response. Distinguished so stores can force a session
    /// reset uniformly.
    #[error("{}", .message.as_deref().unwrap_or("Not authorized"))]
    Auth {
        status: u16,
        message: Option<String>,
    },

    /// No response at all (DNS failure, refused connection, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx response whose body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build the right variant for a non-2xx status.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        if status == 401 || status == 403 {
            ApiError::Auth { status, message }
        } else {
            ApiError::Api { status, message }
        }
    }

    /// The server-provided message, if any.
    ///
    /// Stores use this for the `server message or operation fallback`
    /// pattern when populating a slice's error field.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } | ApiError::Auth { message, .. } => message.as_deref(),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// HTTP status code, when a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } | ApiError::Auth { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is an authentication/authorization failure.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }
}

/// Error body shape the backend uses: `{ "message": "..." }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
