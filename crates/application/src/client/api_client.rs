//! Tenant-bound API client facade.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use heirloom_domain::{
    ApiError, ApiRequest, ApiResponse, ApiResult, HttpMethod, PublicRoutes, Tenant,
};

use crate::client::{BearerAuth, SessionExpiry};
use crate::ports::{HttpTransport, Navigator, SessionStore};

/// The authenticated client for one tenant.
///
/// Construction is the factory from the source design: given a token
/// store (and the shell's navigator), produce a client whose requests
/// carry that tenant's bearer token and whose auth failures clear that
/// tenant's session. The base transport is shared between tenants; the
/// session stores never are.
pub struct ApiClient {
    tenant: Tenant,
    transport: SessionExpiry<BearerAuth<Arc<dyn HttpTransport>>>,
}

impl ApiClient {
    /// Builds the client for one tenant, composing the decorators in
    /// their fixed order: bearer injection innermost, expiry handling
    /// outermost.
    #[must_use]
    pub fn new(
        base: Arc<dyn HttpTransport>,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        public_routes: PublicRoutes,
    ) -> Self {
        let tenant = store.tenant();
        let bearer = BearerAuth::new(base, Arc::clone(&store), public_routes);
        let transport = SessionExpiry::new(bearer, store, navigator);
        Self { tenant, transport }
    }

    /// The tenant this client is bound to.
    #[must_use]
    pub const fn tenant(&self) -> Tenant {
        self.tenant
    }

    /// Sends a raw request through the decorated transport.
    ///
    /// # Errors
    ///
    /// Returns transport failures and [`ApiError::SessionExpired`];
    /// HTTP error statuses come back as `Ok` responses for the caller
    /// to inspect.
    pub async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.transport.send(request).await
    }

    /// GET `path`.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn get(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(ApiRequest::get(path)).await
    }

    /// POST `body` to `path` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body cannot be serialized,
    /// otherwise see [`Self::send`].
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<ApiResponse> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(ApiRequest::post(path, value)).await
    }

    /// PUT `body` to `path` as JSON.
    ///
    /// # Errors
    ///
    /// See [`Self::post`].
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<ApiResponse> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let mut request = ApiRequest::new(HttpMethod::Put, path);
        request.body = Some(value);
        self.send(request).await
    }

    /// PATCH `body` to `path` as JSON.
    ///
    /// # Errors
    ///
    /// See [`Self::post`].
    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<ApiResponse> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let mut request = ApiRequest::new(HttpMethod::Patch, path);
        request.body = Some(value);
        self.send(request).await
    }

    /// DELETE `path`.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn delete(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(ApiRequest::new(HttpMethod::Delete, path)).await
    }

    /// GET `path` and decode a 2xx JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx responses and
    /// [`ApiError::Decode`] for undecodable bodies, in addition to
    /// [`Self::send`] failures.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get(path).await?.into_success()?.json()
    }

    /// POST and decode a 2xx JSON body into `T`.
    ///
    /// # Errors
    ///
    /// See [`Self::get_json`].
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.post(path, body).await?.into_success()?.json()
    }
}
