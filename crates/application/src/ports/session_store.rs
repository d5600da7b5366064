//! Session store port

use async_trait::async_trait;
use heirloom_domain::{SessionState, Tenant};

/// Port for one tenant's session, as consumed by the API client.
///
/// A client is bound to exactly one store at construction and never
/// reads another tenant's session. The two obligations on
/// implementations:
///
/// - [`snapshot`](Self::snapshot) must be synchronous: it is called on
///   every outgoing request, at interception time, with no await.
/// - [`logout`](Self::logout) must be idempotent and must clear the
///   tokens from both memory and persisted storage. Concurrent
///   invocations (several in-flight requests each observing a 401)
///   must all succeed.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The tenant this store belongs to.
    fn tenant(&self) -> Tenant;

    /// Returns the current session state without awaiting.
    ///
    /// `Uninitialized` means persisted tokens have not been restored
    /// yet; callers deciding whether a user is logged out must gate on
    /// [`SessionState::is_ready`] first.
    fn snapshot(&self) -> SessionState;

    /// Clears the session from memory and from persisted storage.
    ///
    /// The in-memory clear is visible before the first await point, so
    /// no request issued after `logout` returns can observe a token.
    async fn logout(&self);
}
