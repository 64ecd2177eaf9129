//! Shared fixtures for integration tests.

use std::sync::Arc;

use velo::adapters::ReqwestHttpClient;
use velo::api::ApiClient;
use velo::config::ClientConfig;
use velo::session::SessionContext;

/// An [`ApiClient`] over the real reqwest transport, pointed at a test
/// server, plus the session context it reads tokens from.
pub fn api_for(base_url: &str) -> (Arc<ApiClient>, SessionContext) {
    let context = SessionContext::new();
    let config = ClientConfig::new().with_base_url(base_url);
    let http = Arc::new(ReqwestHttpClient::from_config(&config));
    (
        Arc::new(ApiClient::new(config, http, context.clone())),
        context,
    )
}
