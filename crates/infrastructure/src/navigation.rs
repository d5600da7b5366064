//! Channel-based navigator.
//!
//! The client core only knows the `Navigator` port. This adapter
//! tracks the current view path and publishes redirect targets on an
//! unbounded channel; the embedding shell consumes the channel and
//! performs the actual navigation as a full view reset.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use heirloom_application::ports::Navigator;

/// Navigator that forwards redirects to the shell over a channel.
pub struct ChannelNavigator {
    current: Mutex<String>,
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNavigator {
    /// Creates a navigator starting at `/` and the receiver the shell
    /// drains for redirect targets.
    #[must_use]
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                current: Mutex::new("/".to_string()),
                sender,
            }),
            receiver,
        )
    }

    /// Records the path the shell is currently showing. The shell
    /// calls this on every navigation it performs, so expiry-time
    /// redirect decisions see the real location.
    pub fn set_current_path(&self, path: impl Into<String>) {
        *self.current.lock() = path.into();
    }
}

impl Navigator for ChannelNavigator {
    fn current_path(&self) -> String {
        self.current.lock().clone()
    }

    fn redirect(&self, to: &str) {
        // The redirect takes effect locally even if the shell has
        // hung up; later current_path reads stay consistent.
        *self.current.lock() = to.to_string();
        if self.sender.send(to.to_string()).is_err() {
            tracing::warn!(target_path = to, "redirect dropped: shell receiver closed");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_redirect_reaches_shell_and_updates_path() {
        let (navigator, mut receiver) = ChannelNavigator::new();
        navigator.set_current_path("/seller/dashboard");

        navigator.redirect("/seller/login");

        assert_eq!(receiver.recv().await.as_deref(), Some("/seller/login"));
        assert_eq!(navigator.current_path(), "/seller/login");
    }

    #[tokio::test]
    async fn test_redirect_survives_closed_receiver() {
        let (navigator, receiver) = ChannelNavigator::new();
        drop(receiver);

        navigator.redirect("/login");
        assert_eq!(navigator.current_path(), "/login");
    }
}
