//! Client configuration.
//!
//! Loaded from a JSON file next to the persisted sessions, with the
//! base URL overridable through `HEIRLOOM_BASE_URL` for development
//! against a local backend.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use heirloom_domain::PublicRoutes;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for this shape.
    #[error("config parse error: {0}")]
    Parse(String),

    /// An override value is not a valid URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Settings shared by all tenant clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL, possibly carrying a path prefix.
    pub base_url: Url,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Paths that bypass token injection.
    pub public_routes: PublicRoutes,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // Local backend default; deployments override via file or env.
            #[allow(clippy::unwrap_used)]
            base_url: Url::parse("http://localhost:8080").unwrap(),
            timeout_ms: 10_000,
            user_agent: format!("Heirloom/{}", env!("CARGO_PKG_VERSION")),
            public_routes: PublicRoutes::marketplace_defaults(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from `path`, falling back to defaults when
    /// the file does not exist, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed,
    /// or an override is invalid.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = match tokio::fs::read(path).await {
            Ok(content) => serde_json::from_slice(&content)
                .map_err(|e| ConfigError::Parse(e.to_string()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if let Ok(base) = std::env::var("HEIRLOOM_BASE_URL") {
            config.base_url = Url::parse(&base).map_err(|e| {
                ConfigError::InvalidBaseUrl(format!("{base}: {e}"))
            })?;
        }

        Ok(config)
    }

    /// Writes the configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_vec_pretty(self)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}
