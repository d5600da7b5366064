//! Auth-gated page contract.
//!
//! Pages that require a logged-in user evaluate the session through
//! this gate instead of reading the token directly. The gate encodes
//! the one ordering rule of the whole design: a missing token means
//! nothing until hydration has completed.

use heirloom_domain::Session;

use crate::ports::{Navigator, SessionStore};

/// Result of evaluating a tenant session for a protected page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthGate {
    /// Hydration has not completed; render nothing and re-evaluate
    /// when the store becomes ready. Never redirect from this state.
    Pending,
    /// A token is present; the page may proceed.
    Authenticated(Session),
    /// Hydrated and unauthenticated; the user belongs on the login
    /// page, with a `redirectTo` pointing back here.
    LoginRequired {
        /// Full login route including the return-destination query.
        redirect: String,
    },
}

impl AuthGate {
    /// Evaluates a store against the page at `current_path`.
    ///
    /// Pure: no redirect is performed. Use [`Self::enforce`] to also
    /// navigate.
    #[must_use]
    pub fn evaluate(store: &dyn SessionStore, current_path: &str) -> Self {
        let Some(session) = store.snapshot().session().cloned() else {
            return Self::Pending;
        };

        if session.is_authenticated() {
            return Self::Authenticated(session);
        }

        let login = store.tenant().login_path();
        let query = serde_urlencoded::to_string([("redirectTo", current_path)])
            .unwrap_or_default();
        Self::LoginRequired {
            redirect: format!("{login}?{query}"),
        }
    }

    /// Evaluates the store at the navigator's current path and, when
    /// login is required, performs the redirect.
    ///
    /// Returns the session when the page may proceed, `None` when it
    /// must not render (pending hydration or redirected to login).
    pub fn enforce(store: &dyn SessionStore, navigator: &dyn Navigator) -> Option<Session> {
        match Self::evaluate(store, &navigator.current_path()) {
            Self::Pending => None,
            Self::Authenticated(session) => Some(session),
            Self::LoginRequired { redirect } => {
                tracing::debug!(tenant = %store.tenant(), redirect, "unauthenticated page access");
                navigator.redirect(&redirect);
                None
            }
        }
    }
}
