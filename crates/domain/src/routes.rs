//! Public route allow-list.
//!
//! Endpoints such as login and join must never carry a bearer token:
//! a stale token on the login call itself would let an expired session
//! block re-authentication. Matching is by substring, mirroring the
//! backend's route grouping (`/public/...` trees plus a handful of
//! explicit auth endpoints).

use serde::{Deserialize, Serialize};

/// Allow-list of path fragments that bypass token injection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicRoutes(Vec<String>);

impl PublicRoutes {
    /// Creates an allow-list from the given fragments.
    #[must_use]
    pub fn new(fragments: Vec<String>) -> Self {
        Self(fragments)
    }

    /// Creates an empty allow-list (every request authenticated).
    #[must_use]
    pub const fn none() -> Self {
        Self(Vec::new())
    }

    /// The marketplace defaults: auth entry points for all three
    /// tenants plus the anonymous catalog tree.
    #[must_use]
    pub fn marketplace_defaults() -> Self {
        Self(
            [
                "/public/",
                "/auth/login",
                "/auth/join",
                "/auth/reissue",
                "/member/login",
                "/member/join",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        )
    }

    /// Returns true if the path matches any allow-listed fragment.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.0.iter().any(|fragment| path.contains(fragment))
    }

    /// Adds a fragment to the allow-list.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.0.push(fragment.into());
    }

    /// Returns the configured fragments.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.0
    }
}

impl Default for PublicRoutes {
    fn default() -> Self {
        Self::marketplace_defaults()
    }
}
