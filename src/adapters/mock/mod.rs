//! Mock adapters for tests.

pub mod http;
mod session_store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use session_store::InMemorySessionStore;
