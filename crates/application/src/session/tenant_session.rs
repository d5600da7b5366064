//! Concrete per-tenant session store.
//!
//! Holds the in-memory [`SessionState`] behind a synchronously
//! readable lock and mirrors changes to a [`SessionPersistence`]
//! adapter. Hydration runs once at startup; until it completes,
//! snapshots report `Uninitialized` and consumers must not treat the
//! missing token as a logged-out user.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use heirloom_domain::{Session, SessionRecord, SessionState, Tenant};

use crate::error::SessionError;
use crate::ports::{SessionPersistence, SessionStore};

/// One tenant's session, backed by persistent storage.
pub struct TenantSession {
    tenant: Tenant,
    state: RwLock<SessionState>,
    persistence: Arc<dyn SessionPersistence>,
}

impl TenantSession {
    /// Creates an unhydrated store for the given tenant.
    #[must_use]
    pub fn new(tenant: Tenant, persistence: Arc<dyn SessionPersistence>) -> Self {
        Self {
            tenant,
            state: RwLock::new(SessionState::Uninitialized),
            persistence,
        }
    }

    /// Restores the persisted session, transitioning the state from
    /// `Uninitialized` to `Ready` exactly once.
    ///
    /// A second call is a no-op: hydration never regresses or reloads
    /// an already-authoritative state. A storage failure is logged and
    /// treated as an absent record, so startup always reaches `Ready`.
    pub async fn hydrate(&self) {
        if self.state.read().is_ready() {
            return;
        }

        let session = match self.persistence.load(self.tenant).await {
            Ok(Some(record)) => record.session,
            Ok(None) => Session::empty(),
            Err(e) => {
                tracing::warn!(tenant = %self.tenant, error = %e, "failed to restore session");
                Session::empty()
            }
        };

        let mut state = self.state.write();
        // Another hydrate may have won the race while we were loading.
        if !state.is_ready() {
            *state = SessionState::Ready(session);
        }
    }

    /// Stores the token pair from a successful login and persists it.
    ///
    /// The in-memory state becomes `Ready(session)` even when
    /// persistence fails; the error is returned so the shell can warn
    /// that the login will not survive a restart.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Persist`] if the record cannot be
    /// written.
    pub async fn login(
        &self,
        session: Session,
        display_name: Option<String>,
    ) -> Result<(), SessionError> {
        *self.state.write() = SessionState::Ready(session.clone());

        let record = SessionRecord::new(session, display_name);
        self.persistence.save(self.tenant, &record).await?;
        tracing::debug!(tenant = %self.tenant, "session stored");
        Ok(())
    }

    /// Returns the persisted display name, if any. Used by shells to
    /// greet the user before any backend call completes.
    pub async fn display_name(&self) -> Option<String> {
        match self.persistence.load(self.tenant).await {
            Ok(record) => record.and_then(|r| r.display_name),
            Err(_) => None,
        }
    }
}

#[async_trait]
impl SessionStore for TenantSession {
    fn tenant(&self) -> Tenant {
        self.tenant
    }

    fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    async fn logout(&self) {
        {
            // Memory is cleared before the first await point: no
            // request issued after logout returns can see a token.
            let mut state = self.state.write();
            *state = SessionState::Ready(Session::empty());
        }

        if let Err(e) = self.persistence.clear(self.tenant).await {
            tracing::warn!(tenant = %self.tenant, error = %e, "failed to clear persisted session");
        } else {
            tracing::info!(tenant = %self.tenant, "session cleared");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    use crate::error::PersistenceError;

    /// In-memory persistence double.
    #[derive(Default)]
    struct MemoryPersistence {
        records: Mutex<std::collections::HashMap<Tenant, SessionRecord>>,
        fail_loads: bool,
    }

    #[async_trait]
    impl SessionPersistence for MemoryPersistence {
        async fn load(&self, tenant: Tenant) -> Result<Option<SessionRecord>, PersistenceError> {
            if self.fail_loads {
                return Err(PersistenceError::Serialization("corrupt".to_string()));
            }
            Ok(self.records.lock().get(&tenant).cloned())
        }

        async fn save(
            &self,
            tenant: Tenant,
            record: &SessionRecord,
        ) -> Result<(), PersistenceError> {
            self.records.lock().insert(tenant, record.clone());
            Ok(())
        }

        async fn clear(&self, tenant: Tenant) -> Result<(), PersistenceError> {
            self.records.lock().remove(&tenant);
            Ok(())
        }
    }

    fn store_with(persistence: MemoryPersistence) -> TenantSession {
        TenantSession::new(Tenant::Customer, Arc::new(persistence))
    }

    #[tokio::test]
    async fn test_snapshot_before_hydration_is_uninitialized() {
        let store = store_with(MemoryPersistence::default());
        assert_eq!(store.snapshot(), SessionState::Uninitialized);
    }

    #[tokio::test]
    async fn test_hydrate_restores_persisted_tokens() {
        let persistence = MemoryPersistence::default();
        persistence.records.lock().insert(
            Tenant::Customer,
            SessionRecord::new(Session::authenticated("abc", "ref"), None),
        );

        let store = store_with(persistence);
        store.hydrate().await;

        assert_eq!(store.snapshot().access_token(), Some("abc"));
    }

    #[tokio::test]
    async fn test_hydrate_with_no_record_reaches_ready() {
        let store = store_with(MemoryPersistence::default());
        store.hydrate().await;
        assert_eq!(store.snapshot(), SessionState::Ready(Session::empty()));
    }

    #[tokio::test]
    async fn test_hydrate_failure_treated_as_absent() {
        let store = store_with(MemoryPersistence {
            fail_loads: true,
            ..MemoryPersistence::default()
        });
        store.hydrate().await;
        assert!(store.snapshot().is_ready());
        assert_eq!(store.snapshot().access_token(), None);
    }

    #[tokio::test]
    async fn test_second_hydrate_does_not_regress_login() {
        let store = store_with(MemoryPersistence::default());
        store.hydrate().await;
        store
            .login(Session::authenticated("abc", "ref"), None)
            .await
            .unwrap();

        store.hydrate().await;
        assert_eq!(store.snapshot().access_token(), Some("abc"));
    }

    #[tokio::test]
    async fn test_logout_clears_memory_and_storage() {
        let store = store_with(MemoryPersistence::default());
        store.hydrate().await;
        store
            .login(Session::authenticated("abc", "ref"), Some("Ada".to_string()))
            .await
            .unwrap();

        store.logout().await;

        assert_eq!(store.snapshot(), SessionState::Ready(Session::empty()));
        assert_eq!(store.display_name().await, None);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let store = store_with(MemoryPersistence::default());
        store.hydrate().await;
        store
            .login(Session::authenticated("abc", "ref"), None)
            .await
            .unwrap();

        store.logout().await;
        let after_first = store.snapshot();
        store.logout().await;
        assert_eq!(store.snapshot(), after_first);
    }

    #[tokio::test]
    async fn test_login_persists_display_name() {
        let store = store_with(MemoryPersistence::default());
        store.hydrate().await;
        store
            .login(
                Session::authenticated("abc", "ref"),
                Some("Walnut & Co.".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(store.display_name().await.as_deref(), Some("Walnut & Co."));
    }
}
