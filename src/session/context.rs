//! The in-memory session context.
//!
//! Replaces an ambient global registry: the context is an explicitly passed
//! handle. Reads hand out immutable snapshots; writes go through the handle
//! and fan out over a watch channel so screens can react to login/logout.
//! Writes only occur from sequential auth flows, never concurrently.

use std::sync::Arc;
use tokio::sync::watch;

use crate::models::Session;

/// Cloneable handle to the current session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    tx: Arc<watch::Sender<Option<Session>>>,
}

impl SessionContext {
    /// Create a context with no active session.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Immutable snapshot of the current session, if any.
    pub fn snapshot(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    /// True when a session is active in this process.
    pub fn is_logged_in(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Authorization header value for the current session.
    pub fn bearer_header(&self) -> Option<String> {
        self.tx.borrow().as_ref().map(Session::bearer_header)
    }

    /// Replace the current session.
    pub fn set(&self, session: Session) {
        self.tx.send_replace(Some(session));
    }

    /// Drop the current session.
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    /// Subscribe to session changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            token: "tok".to_string(),
            user_id: 1,
            display_name: "A".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_starts_logged_out() {
        let ctx = SessionContext::new();
        assert!(!ctx.is_logged_in());
        assert!(ctx.snapshot().is_none());
        assert!(ctx.bearer_header().is_none());
    }

    #[test]
    fn test_set_and_clear() {
        let ctx = SessionContext::new();
        ctx.set(sample());
        assert!(ctx.is_logged_in());
        assert_eq!(ctx.bearer_header().as_deref(), Some("Bearer tok"));

        ctx.clear();
        assert!(!ctx.is_logged_in());
    }

    #[test]
    fn test_clones_share_state() {
        let ctx = SessionContext::new();
        let handle = ctx.clone();
        ctx.set(sample());
        assert!(handle.is_logged_in());
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let ctx = SessionContext::new();
        let mut rx = ctx.subscribe();
        ctx.set(sample());
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_some());
    }
}
