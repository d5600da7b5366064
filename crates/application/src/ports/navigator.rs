//! Navigation port

/// Port for the embedding shell's navigation.
///
/// The client inspects the current view path when choosing a login
/// route after session expiry, and issues redirects through this port.
/// `redirect` has hard-navigation semantics: the shell is expected to
/// discard the current view state entirely, the way a full page load
/// would. There is deliberately one redirect strategy, not two.
pub trait Navigator: Send + Sync {
    /// Returns the path of the view currently shown, e.g.
    /// `/seller/dashboard`.
    fn current_path(&self) -> String;

    /// Navigates to the given path, resetting view state.
    ///
    /// Fire-and-forget: the client does not wait for the navigation to
    /// take effect, and in-flight requests are not aborted by it.
    fn redirect(&self, to: &str);
}
