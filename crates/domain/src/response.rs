//! Response representation.
//!
//! The transport returns an [`ApiResponse`] for every request the
//! backend answered, regardless of status; only transport-level
//! failures become errors at that layer. Status-based decisions
//! (auth failure handling, success decoding) happen above it.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP status code with the predicates this client cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true for the two statuses that invalidate a session:
    /// 401 (unauthenticated) and 403 (forbidden).
    #[must_use]
    pub const fn is_auth_failure(self) -> bool {
        self.0 == 401 || self.0 == 403
    }

    /// Returns true for any 4xx or 5xx status.
    #[must_use]
    pub const fn is_error(self) -> bool {
        self.0 >= 400 && self.0 < 600
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A response from the marketplace backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers, lowercased names.
    pub headers: HashMap<String, String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status: status.into(),
            headers,
            body,
        }
    }

    /// Creates a bodyless response with the given status. Mostly
    /// useful in tests.
    #[must_use]
    pub fn with_status(status: u16) -> Self {
        Self {
            status: StatusCode(status),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Returns the body as UTF-8, lossily.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not valid JSON for
    /// `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Converts a non-success response into an error, passing 2xx
    /// responses through untouched.
    ///
    /// Pages use this when they only care about the happy path; the
    /// error carries status and body text for inline display.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for any non-2xx status.
    pub fn into_success(self) -> Result<Self, ApiError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status.as_u16(),
                body: self.body_text(),
            })
        }
    }
}
