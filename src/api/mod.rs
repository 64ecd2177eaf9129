//! Typed HTTP API layer.
//!
//! [`ApiClient`] owns the base URL, the transport, and the session context
//! used to attach bearer tokens. The per-resource modules hold purely
//! declarative request/response shapes and path builders; repositories in
//! `crate::repo` are the callers.

pub mod auth;
pub mod bicycles;
mod client;
pub mod components;
pub mod routes;
pub mod workshops;

pub use client::ApiClient;
