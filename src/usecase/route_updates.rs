//! Route update (journal entry) validation.

use std::sync::Arc;

use super::{require_positive_id, UPDATE_CONTENT_MSG};
use crate::error::{ClientError, ClientResult};
use crate::models::RouteUpdate;
use crate::repo::RouteRepository;

/// Validates route update mutations: content non-blank, ids positive.
#[derive(Clone)]
pub struct ManageRouteUpdates {
    repo: Arc<RouteRepository>,
}

impl ManageRouteUpdates {
    pub fn new(repo: Arc<RouteRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, route_id: i64, content: &str) -> ClientResult<RouteUpdate> {
        require_positive_id(route_id)?;
        validate_content(content)?;
        self.repo.create_update(route_id, content.trim()).await
    }

    pub async fn edit(
        &self,
        route_id: i64,
        update_id: i64,
        content: &str,
    ) -> ClientResult<RouteUpdate> {
        require_positive_id(route_id)?;
        require_positive_id(update_id)?;
        validate_content(content)?;
        self.repo
            .edit_update(route_id, update_id, content.trim())
            .await
    }

    pub async fn delete(&self, route_id: i64, update_id: i64) -> ClientResult<()> {
        require_positive_id(route_id)?;
        require_positive_id(update_id)?;
        self.repo.delete_update(route_id, update_id).await
    }
}

fn validate_content(content: &str) -> ClientResult<()> {
    if content.trim().is_empty() {
        Err(ClientError::Validation(UPDATE_CONTENT_MSG.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::api::ApiClient;
    use crate::config::ClientConfig;
    use crate::session::SessionContext;

    fn use_case() -> (ManageRouteUpdates, MockHttpClient) {
        let http = MockHttpClient::new();
        let api = Arc::new(ApiClient::new(
            ClientConfig::new().with_base_url("https://api.test"),
            Arc::new(http.clone()),
            SessionContext::new(),
        ));
        (
            ManageRouteUpdates::new(Arc::new(RouteRepository::new(api))),
            http,
        )
    }

    #[tokio::test]
    async fn test_blank_content_rejected_before_network() {
        let (updates, http) = use_case();
        let err = updates.create(1, "   ").await.unwrap_err();
        assert_eq!(err, ClientError::Validation(UPDATE_CONTENT_MSG.to_string()));
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_content_is_trimmed() {
        let (updates, http) = use_case();
        http.set_json_response(
            "https://api.test/routes/1/updates",
            201,
            r#"{"id":5,"route_id":1,"user_id":2,"content":"flooded"}"#,
        );
        updates.create(1, "  flooded  ").await.unwrap();
        assert!(http.requests()[0]
            .body
            .as_deref()
            .unwrap()
            .contains(r#""content":"flooded""#));
    }
}
