//! Bearer token injection decorator.

use std::sync::Arc;

use async_trait::async_trait;
use heirloom_domain::{ApiRequest, ApiResponse, ApiResult, PublicRoutes};

use crate::ports::{HttpTransport, SessionStore};

/// Attaches `Authorization: Bearer <token>` to outgoing requests.
///
/// Requests whose path matches the public allow-list are sent exactly
/// as given, token or not, so a stale token can never block a login
/// call. When no token is present the request goes out
/// unauthenticated and the backend decides whether to reject it.
///
/// An un-hydrated store simply yields no token here; this layer
/// provides no protection against reading too early. Pages gate on
/// hydration via [`AuthGate`](crate::auth_gate::AuthGate).
pub struct BearerAuth<T> {
    inner: T,
    store: Arc<dyn SessionStore>,
    public_routes: PublicRoutes,
}

impl<T> BearerAuth<T> {
    /// Wraps a transport with token injection for one tenant's store.
    #[must_use]
    pub fn new(inner: T, store: Arc<dyn SessionStore>, public_routes: PublicRoutes) -> Self {
        Self {
            inner,
            store,
            public_routes,
        }
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for BearerAuth<T> {
    async fn send(&self, mut request: ApiRequest) -> ApiResult<ApiResponse> {
        if !self.public_routes.matches(&request.path) && !request.has_header("authorization") {
            let state = self.store.snapshot();
            if let Some(token) = state.access_token() {
                request
                    .headers
                    .insert("Authorization".to_string(), format!("Bearer {token}"));
            }
        }
        self.inner.send(request).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use heirloom_domain::{Session, SessionState, Tenant};

    struct FixedStore(SessionState);

    #[async_trait]
    impl SessionStore for FixedStore {
        fn tenant(&self) -> Tenant {
            Tenant::Customer
        }

        fn snapshot(&self) -> SessionState {
            self.0.clone()
        }

        async fn logout(&self) {}
    }

    /// Transport double that records what it was asked to send.
    #[derive(Default)]
    struct CapturingTransport {
        seen: Mutex<Vec<ApiRequest>>,
    }

    #[async_trait]
    impl HttpTransport for CapturingTransport {
        async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
            self.seen.lock().push(request);
            Ok(ApiResponse::with_status(200))
        }
    }

    fn authenticated_store() -> Arc<dyn SessionStore> {
        Arc::new(FixedStore(SessionState::Ready(Session::authenticated(
            "abc", "ref",
        ))))
    }

    #[tokio::test]
    async fn test_token_attached_to_private_path() {
        let transport = Arc::new(CapturingTransport::default());
        let bearer = BearerAuth::new(
            Arc::clone(&transport),
            authenticated_store(),
            PublicRoutes::marketplace_defaults(),
        );

        bearer
            .send(ApiRequest::get("/customer/orders"))
            .await
            .unwrap();

        let seen = transport.seen.lock();
        assert_eq!(
            seen[0].headers.get("Authorization").map(String::as_str),
            Some("Bearer abc")
        );
    }

    #[tokio::test]
    async fn test_public_path_never_carries_token() {
        let transport = Arc::new(CapturingTransport::default());
        let bearer = BearerAuth::new(
            Arc::clone(&transport),
            authenticated_store(),
            PublicRoutes::marketplace_defaults(),
        );

        bearer
            .send(ApiRequest::get("/public/auth/login"))
            .await
            .unwrap();

        let seen = transport.seen.lock();
        assert!(!seen[0].has_header("authorization"));
    }

    #[tokio::test]
    async fn test_missing_token_sends_unauthenticated() {
        let transport = Arc::new(CapturingTransport::default());
        let bearer = BearerAuth::new(
            Arc::clone(&transport),
            Arc::new(FixedStore(SessionState::Ready(Session::empty()))),
            PublicRoutes::marketplace_defaults(),
        );

        bearer
            .send(ApiRequest::get("/customer/orders"))
            .await
            .unwrap();

        let seen = transport.seen.lock();
        assert_eq!(seen.len(), 1);
        assert!(!seen[0].has_header("authorization"));
    }

    #[tokio::test]
    async fn test_caller_supplied_authorization_wins() {
        let transport = Arc::new(CapturingTransport::default());
        let bearer = BearerAuth::new(
            Arc::clone(&transport),
            authenticated_store(),
            PublicRoutes::marketplace_defaults(),
        );

        bearer
            .send(ApiRequest::get("/customer/orders").with_header("Authorization", "Bearer other"))
            .await
            .unwrap();

        let seen = transport.seen.lock();
        assert_eq!(
            seen[0].headers.get("Authorization").map(String::as_str),
            Some("Bearer other")
        );
    }

    #[tokio::test]
    async fn test_unhydrated_store_yields_no_token() {
        let transport = Arc::new(CapturingTransport::default());
        let bearer = BearerAuth::new(
            Arc::clone(&transport),
            Arc::new(FixedStore(SessionState::Uninitialized)),
            PublicRoutes::marketplace_defaults(),
        );

        bearer
            .send(ApiRequest::get("/customer/orders"))
            .await
            .unwrap();

        let seen = transport.seen.lock();
        assert!(!seen[0].has_header("authorization"));
    }
}
