//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. It is shared by
//! all three tenant clients; everything tenant-specific (tokens,
//! expiry handling) lives in the decorators above it.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use heirloom_application::ports::HttpTransport;
use heirloom_domain::{ApiError, ApiRequest, ApiResponse, ApiResult, HttpMethod};

use crate::config::ClientConfig;

/// Transport for the marketplace backend, backed by `reqwest::Client`.
///
/// Every request is tagged with a `X-Request-Id` (uuid v7) so backend
/// logs can be correlated with client traces. Responses come back as
/// `Ok` for every HTTP status; only transport-level failures map to
/// errors.
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be built.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    /// Creates a transport around an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }

    /// Converts the domain method to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Resolves a request path against the base URL, keeping any path
    /// prefix the base URL carries (e.g. `/api/v1`).
    fn build_url(&self, request: &ApiRequest) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            request.path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_query(request.query_string().as_deref());
        Ok(url)
    }

    /// Maps reqwest errors into the domain transport taxonomy.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> ApiError {
        if error.is_timeout() {
            return ApiError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return ApiError::Dns {
                    host: error
                        .url()
                        .and_then(Url::host_str)
                        .unwrap_or("unknown")
                        .to_string(),
                };
            }
            return ApiError::Connection(message);
        }

        ApiError::Transport(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.build_url(&request)?;
        let request_id = uuid::Uuid::now_v7();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(self.timeout)
            .header("Accept", "application/json")
            .header("X-Request-Id", request_id.to_string());

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            %request_id,
            "sending request"
        );

        let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to read body: {e}")))?
            .to_vec();

        Ok(ApiResponse::new(status, headers, body))
    }
}
