//! Session expiry decorator.

use std::sync::Arc;

use async_trait::async_trait;
use heirloom_domain::{ApiError, ApiRequest, ApiResponse, ApiResult, Tenant};

use crate::ports::{HttpTransport, Navigator, SessionStore};

/// Handles 401/403 responses by clearing the session and redirecting
/// to login.
///
/// The login route is chosen by the current view path at the moment of
/// failure, not by which store is bound: with a shared layout the
/// wrong tenant's page may be open, and the user should land on the
/// login screen for where they are. The failure is still surfaced to
/// the caller as [`ApiError::SessionExpired`] after cleanup, so
/// page-level error handling observes it.
///
/// All other statuses and every transport error pass through
/// untouched. There is no silent token renewal.
pub struct SessionExpiry<T> {
    inner: T,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl<T> SessionExpiry<T> {
    /// Wraps a transport with expiry handling for one tenant's store.
    #[must_use]
    pub fn new(inner: T, store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            inner,
            store,
            navigator,
        }
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for SessionExpiry<T> {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let path = request.path.clone();
        let response = self.inner.send(request).await?;

        if !response.status.is_auth_failure() {
            return Ok(response);
        }

        let status = response.status.as_u16();
        // Once per failing response. Concurrent failures each take
        // this path; logout is idempotent by contract.
        self.store.logout().await;

        let current = self.navigator.current_path();
        let login = Tenant::from_path(&current).login_path();
        tracing::warn!(
            tenant = %self.store.tenant(),
            status,
            path,
            redirect = login,
            "session rejected by backend"
        );
        self.navigator.redirect(login);

        Err(ApiError::SessionExpired {
            status,
            redirected_to: login.to_string(),
        })
    }
}
