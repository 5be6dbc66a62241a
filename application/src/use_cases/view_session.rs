//! View session: discards results of superseded fetches.
//!
//! Each navigation gets a fresh [`ViewTicket`]. Starting a new navigation
//! cancels the previous ticket, so a slow response for a page the user
//! already left is dropped instead of overwriting the current view.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Tracks the currently displayed view.
pub struct ViewSession {
    root: CancellationToken,
    current: Mutex<CancellationToken>,
}

impl Default for ViewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSession {
    pub fn new() -> Self {
        let root = CancellationToken::new();
        let current = root.child_token();
        Self {
            root,
            current: Mutex::new(current),
        }
    }

    /// Start a new navigation, superseding the previous one.
    pub fn navigate(&self) -> ViewTicket {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        current.cancel();
        *current = self.root.child_token();
        ViewTicket {
            token: current.clone(),
        }
    }

    /// Cancel the current navigation only.
    pub fn cancel_current(&self) {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel();
    }

    /// Cancel every navigation, current and future (session shutdown).
    pub fn shutdown(&self) {
        self.root.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }
}

/// Handle for one navigation's in-flight work.
#[derive(Debug, Clone)]
pub struct ViewTicket {
    token: CancellationToken,
}

impl ViewTicket {
    /// Whether results for this navigation may still be applied.
    pub fn is_current(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Drive `fut` unless this ticket is superseded first.
    ///
    /// Returns `None` when the ticket was cancelled before or while the
    /// future ran, including a future that finished just as it was
    /// superseded.
    pub async fn run<F>(&self, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        let output = tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            output = fut => Some(output),
        };
        if output.is_some() && !self.is_current() {
            debug!("Discarding result of a superseded view");
            return None;
        }
        if output.is_none() {
            debug!("View fetch cancelled");
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_current_ticket_yields_result() {
        let session = ViewSession::new();
        let ticket = session.navigate();

        assert_eq!(ticket.run(async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn test_navigation_supersedes_previous_ticket() {
        let session = ViewSession::new();
        let first = session.navigate();
        let second = session.navigate();

        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(first.run(async { "stale" }).await, None);
        assert_eq!(second.run(async { "fresh" }).await, Some("fresh"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_fetch_is_dropped_when_user_navigates_away() {
        let session = std::sync::Arc::new(ViewSession::new());
        let ticket = session.navigate();

        let slow = tokio::spawn(async move {
            ticket
                .run(async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "conference 1"
                })
                .await
        });

        tokio::time::sleep(Duration::from_secs(1)).await;
        let next = session.navigate();

        assert_eq!(slow.await.unwrap(), None);
        assert!(next.is_current());
    }

    #[tokio::test]
    async fn test_cancel_current_leaves_session_usable() {
        let session = ViewSession::new();
        let ticket = session.navigate();
        session.cancel_current();

        assert!(!ticket.is_current());
        assert!(session.navigate().is_current());
    }

    #[tokio::test]
    async fn test_shutdown_cancels_future_navigations() {
        let session = ViewSession::new();
        session.shutdown();

        assert!(session.is_shut_down());
        assert_eq!(session.navigate().run(async { 1 }).await, None);
    }
}
