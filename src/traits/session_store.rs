//! Session persistence trait abstraction.
//!
//! One serialized session record, encrypted at rest by the production
//! adapter. The trait exists so the session lifecycle can be exercised with
//! an in-memory store in tests.

use async_trait::async_trait;

use crate::models::Session;

/// Session store operation errors.
#[derive(Debug, Clone)]
pub enum StoreError {
    /// Failed to load the stored session
    LoadFailed(String),
    /// Failed to save the session
    SaveFailed(String),
    /// Failed to clear the stored session
    ClearFailed(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::LoadFailed(msg) => write!(f, "failed to load session: {}", msg),
            StoreError::SaveFailed(msg) => write!(f, "failed to save session: {}", msg),
            StoreError::ClearFailed(msg) => write!(f, "failed to clear session: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Trait for storing the single authenticated session record.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored session.
    ///
    /// Returns `Ok(None)` when no record exists or the record cannot be
    /// decoded (a corrupt record is indistinguishable from no record).
    async fn load(&self) -> Result<Option<Session>, StoreError>;

    /// Save the session, replacing any existing record.
    async fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Remove the stored record. Succeeds when no record exists.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Check whether a stored record exists, without decoding it.
    async fn exists(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(
            StoreError::LoadFailed("read error".to_string()).to_string(),
            "failed to load session: read error"
        );
        assert_eq!(
            StoreError::SaveFailed("disk full".to_string()).to_string(),
            "failed to save session: disk full"
        );
        assert_eq!(
            StoreError::ClearFailed("permission denied".to_string()).to_string(),
            "failed to clear session: permission denied"
        );
    }

    #[test]
    fn test_store_error_implements_error_trait() {
        let err = StoreError::LoadFailed("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
