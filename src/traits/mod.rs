//! Trait abstractions for external effects.
//!
//! These seams let the repositories and the session lifecycle run against
//! mocks in tests: HTTP access behind [`HttpClient`], session persistence
//! behind [`SessionStore`]. Production adapters live in `crate::adapters`.

mod http;
mod session_store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use session_store::{SessionStore, StoreError};
