//! Unified error type for the client core.
//!
//! Every fallible operation in the crate converges on [`ClientError`]: one
//! tagged union instead of a two-variant result type per domain area. The
//! four variants mirror where a failure originated, but callers are not
//! expected to branch on them — each variant carries the human-readable
//! message that the UI displays, and nothing else.
//!
//! - `Validation`: rejected locally, before any network call. Synchronous
//!   and side-effect-free.
//! - `Auth`: the server rejected the bearer token (401/403).
//! - `Transport`: any other non-2xx response, with the server's message
//!   when one could be parsed.
//! - `Network`: no response at all (connect failure, timeout, DNS).
//!
//! Nothing here is fatal; every failure is recoverable by user retry.

use thiserror::Error;

/// Result alias used across repositories, use cases, and the session layer.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client-side error, collapsed to a displayable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Input rejected locally; no network call was made.
    #[error("{0}")]
    Validation(String),

    /// The server rejected the credentials or token.
    #[error("{0}")]
    Auth(String),

    /// The server responded with a non-success status.
    #[error("{0}")]
    Transport(String),

    /// No response was received at all.
    #[error("{0}")]
    Network(String),
}

impl ClientError {
    /// The message shown to the user. Identical to the `Display` output.
    pub fn message(&self) -> &str {
        match self {
            ClientError::Validation(m)
            | ClientError::Auth(m)
            | ClientError::Transport(m)
            | ClientError::Network(m) => m,
        }
    }

    /// True when no response was received (as opposed to a server rejection).
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// True when the input never left the device.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_matches_display() {
        let err = ClientError::Transport("connection error: 500".to_string());
        assert_eq!(err.message(), err.to_string());
    }

    #[test]
    fn test_variant_predicates() {
        assert!(ClientError::Network("network error: timeout".into()).is_network());
        assert!(!ClientError::Auth("invalid token".into()).is_network());
        assert!(ClientError::Validation("rating must be between 1 and 5".into()).is_validation());
        assert!(!ClientError::Transport("x".into()).is_validation());
    }

    #[test]
    fn test_implements_error_trait() {
        let err = ClientError::Auth("expired".into());
        let _: &dyn std::error::Error = &err;
    }
}
