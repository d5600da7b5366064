//! Application error types

use thiserror::Error;

/// Errors from session persistence adapters.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// An underlying storage operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record could not be serialized or parsed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors from session lifecycle operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Writing the session to persistent storage failed. The
    /// in-memory session is still updated when this is returned.
    #[error("failed to persist session: {0}")]
    Persist(#[from] PersistenceError),
}
