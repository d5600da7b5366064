//! Heirloom Domain - Core types for the marketplace client
//!
//! This crate defines the domain model shared by every tenant client
//! of the Heirloom used-furniture marketplace. All types here are pure
//! Rust with no I/O dependencies.

pub mod error;
pub mod request;
pub mod response;
pub mod routes;
pub mod session;
pub mod tenant;

pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, HttpMethod};
pub use response::{ApiResponse, StatusCode};
pub use routes::PublicRoutes;
pub use session::{Session, SessionRecord, SessionState};
pub use tenant::Tenant;
