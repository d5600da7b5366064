//! File-based session persistence.
//!
//! Each tenant's session is stored as one JSON file under the
//! configured directory, named by the tenant's storage key:
//!
//! ```json
//! {
//!   "access_token": "...",
//!   "refresh_token": "...",
//!   "display_name": "Walnut & Co.",
//!   "saved_at": "2026-08-24T09:00:00Z"
//! }
//! ```
//!
//! Tokens land on disk in the clear, the same trust model as the
//! browser storage this replaces; the directory should not be synced
//! or committed.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use heirloom_application::error::PersistenceError;
use heirloom_application::ports::SessionPersistence;
use heirloom_domain::{SessionRecord, Tenant};

/// Session persistence writing one JSON file per tenant.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
}

impl FileSessionStorage {
    /// Creates storage rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates storage at the platform config location,
    /// e.g. `~/.config/heirloom` on Linux.
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn default_location() -> Result<Self, PersistenceError> {
        let base = dirs::config_dir().ok_or_else(|| {
            PersistenceError::Io(std::io::Error::new(
                ErrorKind::NotFound,
                "no config directory available",
            ))
        })?;
        Ok(Self::new(base.join("heirloom")))
    }

    /// Returns the file path for a tenant's record.
    #[must_use]
    pub fn record_path(&self, tenant: Tenant) -> PathBuf {
        self.dir.join(format!("{}.json", tenant.storage_key()))
    }

    /// The storage directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl SessionPersistence for FileSessionStorage {
    async fn load(&self, tenant: Tenant) -> Result<Option<SessionRecord>, PersistenceError> {
        let path = self.record_path(tenant);

        let content = match tokio::fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PersistenceError::Io(e)),
        };

        let record: SessionRecord = serde_json::from_slice(&content)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;
        Ok(Some(record))
    }

    async fn save(&self, tenant: Tenant, record: &SessionRecord) -> Result<(), PersistenceError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let content = serde_json::to_vec_pretty(record)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;
        tokio::fs::write(self.record_path(tenant), content).await?;
        Ok(())
    }

    async fn clear(&self, tenant: Tenant) -> Result<(), PersistenceError> {
        match tokio::fs::remove_file(self.record_path(tenant)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::Io(e)),
        }
    }
}
