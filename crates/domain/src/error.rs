//! Client error taxonomy.
//!
//! Only one class of failure is handled by the client itself: a 401
//! or 403 from the backend, which clears the session and redirects to
//! login before surfacing as [`ApiError::SessionExpired`]. Everything
//! else is passed through for the calling page to display.

use thiserror::Error;

/// Errors surfaced by the marketplace client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the session (401 or 403). The session has
    /// already been cleared and a redirect to login issued by the time
    /// the caller sees this.
    #[error("session rejected with status {status}; redirected to {redirected_to}")]
    SessionExpired {
        /// The rejecting status, 401 or 403.
        status: u16,
        /// Login route the user was sent to.
        redirected_to: String,
    },

    /// A non-auth error status, surfaced by success-expecting helpers.
    #[error("request failed with status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Response body text, for inline display.
        body: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The host could not be resolved.
    #[error("DNS resolution failed for {host}")]
    Dns {
        /// The unresolvable host.
        host: String,
    },

    /// The request path or base URL was malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body could not be decoded as the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Returns true if this error means the session was invalidated.
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired { .. })
    }
}

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;
