//! The JSON-over-HTTPS client wrapper.
//!
//! All error paths converge on [`ClientError`] so callers never branch on
//! failure type:
//!
//! - non-2xx with a parsable `{"message": …}` body → that message
//! - non-2xx otherwise → `connection error: <status>`
//! - no response at all → `network error: <cause>`
//!
//! 401/403 map to the `Auth` variant; everything else non-2xx is
//! `Transport`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionContext;
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Structured error body the server sends on failures.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Typed API client: base URL + transport + session context.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http: Arc<dyn HttpClient>,
    session: SessionContext,
}

impl ApiClient {
    /// Create a client.
    pub fn new(config: ClientConfig, http: Arc<dyn HttpClient>, session: SessionContext) -> Self {
        Self {
            config,
            http,
            session,
        }
    }

    /// The session context this client reads tokens from.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn headers(&self, authenticated: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if authenticated {
            if let Some(bearer) = self.session.bearer_header() {
                headers.insert("Authorization".to_string(), bearer);
            }
        }
        headers
    }

    /// GET a JSON resource (authenticated).
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self
            .http
            .get(&self.url(path), &self.headers(true))
            .await
            .map_err(network_error)?;
        decode(response)
    }

    /// POST a JSON body, expect a JSON resource back (authenticated).
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(path, body, true, Method::Post).await
    }

    /// POST without a bearer token; used by login and register only.
    pub async fn post_json_public<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(path, body, false, Method::Post).await
    }

    /// PUT a JSON body, expect a JSON resource back (authenticated).
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(path, body, true, Method::Put).await
    }

    /// POST with an empty body and an explicit bearer token, ignoring the
    /// response body.
    ///
    /// Used by logout, which notifies the server after the in-memory session
    /// has already been cleared.
    pub async fn post_unit_with_bearer(&self, path: &str, token: &str) -> ClientResult<()> {
        let mut headers = self.headers(false);
        headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        let response = self
            .http
            .post(&self.url(path), "{}", &headers)
            .await
            .map_err(network_error)?;
        ensure_success(response)
    }

    /// DELETE a resource, ignore the response body (authenticated).
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self
            .http
            .delete(&self.url(path), &self.headers(true))
            .await
            .map_err(network_error)?;
        ensure_success(response)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        authenticated: bool,
        method: Method,
    ) -> ClientResult<T> {
        let payload = serde_json::to_string(body)
            .map_err(|e| ClientError::Transport(format!("failed to encode request: {}", e)))?;
        let url = self.url(path);
        let headers = self.headers(authenticated);
        let response = match method {
            Method::Post => self.http.post(&url, &payload, &headers).await,
            Method::Put => self.http.put(&url, &payload, &headers).await,
        }
        .map_err(network_error)?;
        decode(response)
    }
}

enum Method {
    Post,
    Put,
}

/// Map a transport-level failure (no response) to the network message.
fn network_error(err: HttpError) -> ClientError {
    ClientError::Network(format!("network error: {}", err))
}

/// Extract the user-facing error from a non-success response.
pub(crate) fn extract_error(response: &Response) -> ClientError {
    let message = response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.message.or(body.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("connection error: {}", response.status));
    if response.status == 401 || response.status == 403 {
        ClientError::Auth(message)
    } else {
        ClientError::Transport(message)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    if !response.is_success() {
        tracing::debug!(status = response.status, "api call failed");
        return Err(extract_error(&response));
    }
    response
        .json()
        .map_err(|e| ClientError::Transport(format!("unexpected response body: {}", e)))
}

fn ensure_success(response: Response) -> ClientResult<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(extract_error(&response))
    }
}
