//! Per-tenant session model.
//!
//! A session is created empty at store initialization, populated by a
//! successful login call, read on every outgoing request, and cleared
//! either by explicit logout or by the client's auth-failure handler.
//!
//! Hydration is modeled as an explicit two-phase state rather than a
//! boolean flag: persisted tokens are restored asynchronously at
//! startup, and until that completes the session's authenticity is
//! unknown and must not be trusted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// In-memory token pair for one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token attached to authenticated requests.
    pub access_token: Option<String>,
    /// Token the login flow may exchange for a new access token.
    /// Carried for the backend's benefit; this client never renews
    /// silently.
    pub refresh_token: Option<String>,
}

impl Session {
    /// Creates an empty, unauthenticated session.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
        }
    }

    /// Creates a session holding the given token pair.
    #[must_use]
    pub fn authenticated(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
        }
    }

    /// Returns true if an access token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Clears both tokens. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
    }
}

/// Hydration-aware session state.
///
/// Consumers pattern-match on this instead of polling a `hydrated`
/// flag: `Uninitialized` means persisted state has not been restored
/// yet and no auth decision may be made; `Ready` carries the session
/// once restoration finished (possibly with no tokens at all).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Persisted tokens have not been loaded yet.
    #[default]
    Uninitialized,
    /// Restoration completed; the session is authoritative.
    Ready(Session),
}

impl SessionState {
    /// Returns true once hydration has completed.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns the session if hydration has completed.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Uninitialized => None,
            Self::Ready(session) => Some(session),
        }
    }

    /// Returns the access token, if hydrated and authenticated.
    ///
    /// An `Uninitialized` state yields `None`, which callers must
    /// treat as "unknown", not "logged out" — gate on [`Self::is_ready`]
    /// before acting on the absence of a token.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.session().and_then(|s| s.access_token.as_deref())
    }
}

/// Persisted shape of a tenant session.
///
/// Stored under the tenant's storage key together with the display
/// fields the shell shows while the session is alive (nickname in the
/// storefront header, shop name in the seller dashboard).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The token pair, flattened into the record.
    #[serde(flatten)]
    pub session: Session,
    /// Display name shown by the shell (nickname or shop name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// When this record was last written.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SessionRecord {
    /// Creates a record for the given session, stamped now.
    #[must_use]
    pub fn new(session: Session, display_name: Option<String>) -> Self {
        Self {
            session,
            display_name,
            saved_at: Some(Utc::now()),
        }
    }
}
