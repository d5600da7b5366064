//! Session lifecycle
//!
//! The concrete, dependency-injected session store. One instance per
//! tenant, passed explicitly to the API client factory and to any
//! component needing auth state; there are no module-level singletons.

mod tenant_session;

pub use tenant_session::TenantSession;
