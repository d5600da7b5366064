//! Authenticated API client
//!
//! The client is assembled from explicit decorators around a base
//! [`HttpTransport`](crate::ports::HttpTransport), innermost first:
//!
//! 1. [`BearerAuth`] attaches the tenant's access token unless the
//!    path is on the public allow-list.
//! 2. [`SessionExpiry`] watches responses for 401/403, clears the
//!    session, redirects to the tenant-appropriate login route, and
//!    re-surfaces the failure to the caller.
//!
//! Each decorator has a single responsibility; composition order is
//! fixed by [`ApiClient::new`] and visible in one place.

mod api_client;
mod bearer;
mod expiry;

pub use api_client::ApiClient;
pub use bearer::BearerAuth;
pub use expiry::SessionExpiry;
