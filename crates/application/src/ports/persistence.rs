//! Session persistence port

use async_trait::async_trait;
use heirloom_domain::{SessionRecord, Tenant};

use crate::error::PersistenceError;

/// Port for storing tenant sessions across restarts.
///
/// Each tenant's record lives under its own storage key
/// ([`Tenant::storage_key`]); clearing one tenant never touches
/// another's record.
#[async_trait]
pub trait SessionPersistence: Send + Sync {
    /// Loads the persisted record for a tenant, or `None` if nothing
    /// was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the record cannot
    /// be parsed.
    async fn load(&self, tenant: Tenant) -> Result<Option<SessionRecord>, PersistenceError>;

    /// Saves a tenant's record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or written.
    async fn save(&self, tenant: Tenant, record: &SessionRecord) -> Result<(), PersistenceError>;

    /// Removes a tenant's record. Removing an absent record is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    async fn clear(&self, tenant: Tenant) -> Result<(), PersistenceError>;
}
