//! Heirloom Application - Ports and client core
//!
//! This crate holds the session store, the middleware decorators that
//! make up the authenticated API client, and the port traits the
//! infrastructure layer implements. Nothing here performs I/O
//! directly; all side effects go through ports.

pub mod auth_gate;
pub mod client;
pub mod error;
pub mod ports;
pub mod session;

pub use auth_gate::AuthGate;
pub use client::{ApiClient, BearerAuth, SessionExpiry};
pub use error::{PersistenceError, SessionError};
pub use ports::{HttpTransport, Navigator, SessionPersistence, SessionStore};
pub use session::TenantSession;
