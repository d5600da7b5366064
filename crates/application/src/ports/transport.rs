//! HTTP transport port

use std::sync::Arc;

use async_trait::async_trait;
use heirloom_domain::{ApiRequest, ApiResponse, ApiResult};

/// Port for executing HTTP requests against the marketplace backend.
///
/// Implementations return `Ok` for every request the backend answered,
/// whatever the status; only transport-level failures (timeout,
/// connection, DNS, bad URL) become errors here. Status-based handling
/// belongs to the decorators composed on top.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes a request and returns the backend's response.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures, never for
    /// HTTP error statuses.
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        (**self).send(request).await
    }
}
