//! Client core for the velo route-tracking app.
//!
//! The crate is the network and state layer behind the UI: it owns the
//! session lifecycle (login, registration, auto-login from an encrypted
//! on-disk record, logout), typed access to the velo REST API, and the
//! per-screen view state the UI renders from.
//!
//! Layering, bottom up:
//!
//! - [`traits`] defines the [`HttpClient`](traits::HttpClient) and
//!   [`SessionStore`](traits::SessionStore) seams; [`adapters`] provides the
//!   reqwest and encrypted-file production implementations plus in-memory
//!   mocks for tests.
//! - [`api`] is the typed HTTP client: path builders, request payloads, and
//!   the unified server-error extraction.
//! - [`repo`] exposes one repository per resource; [`usecase`] layers local
//!   validation on top so invalid input never reaches the network.
//! - [`session`] runs the auth state machine and broadcasts the current
//!   session over a watch channel.
//! - [`view_state`] holds screen state: cursor [`Pager`](view_state::Pager)s,
//!   [`Modal`](view_state::Modal) dialogs, and the per-screen orchestrators.

pub mod adapters;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repo;
pub mod session;
pub mod traits;
pub mod usecase;
pub mod view_state;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
