//! In-memory session store for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::models::Session;
use crate::traits::{SessionStore, StoreError};

/// [`SessionStore`] backed by process memory, for tests.
///
/// Cloning yields a handle to the same underlying record, so a test can keep
/// one handle for assertions while the session manager owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    record: Arc<Mutex<Option<Session>>>,
    fail_next_clear: Arc<Mutex<bool>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a session record.
    pub fn with_session(session: Session) -> Self {
        let store = Self::new();
        *store.record.lock().unwrap() = Some(session);
        store
    }

    /// Inspect the stored record directly.
    pub fn stored(&self) -> Option<Session> {
        self.record.lock().unwrap().clone()
    }

    /// Make the next `clear` call fail, for best-effort-deletion tests.
    pub fn fail_next_clear(&self) {
        *self.fail_next_clear.lock().unwrap() = true;
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.record.lock().unwrap().clone())
    }

    async fn save(&self, session: &Session) -> Result<(), StoreError> {
        *self.record.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut fail = self.fail_next_clear.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(StoreError::ClearFailed("simulated failure".to_string()));
        }
        *self.record.lock().unwrap() = None;
        Ok(())
    }

    async fn exists(&self) -> bool {
        self.record.lock().unwrap().is_some()
    }
}
