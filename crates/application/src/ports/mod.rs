//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer, or by a test double.

mod navigator;
mod persistence;
mod session_store;
mod transport;

pub use navigator::Navigator;
pub use persistence::SessionPersistence;
pub use session_store::SessionStore;
pub use transport::HttpTransport;
