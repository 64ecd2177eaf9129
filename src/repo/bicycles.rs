//! Bicycles repository.

use std::sync::Arc;

use crate::api::bicycles::{bicycle_path, BicycleRequest, BICYCLES_PATH};
use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::Bicycle;

/// Repository for the user's bicycles. The garage is small; the listing is
/// not paginated.
#[derive(Clone)]
pub struct BicycleRepository {
    api: Arc<ApiClient>,
}

impl BicycleRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ClientResult<Vec<Bicycle>> {
        self.api.get_json(BICYCLES_PATH).await
    }

    pub async fn get(&self, bicycle_id: i64) -> ClientResult<Bicycle> {
        self.api.get_json(&bicycle_path(bicycle_id)).await
    }

    pub async fn create(&self, name: &str, brand: Option<&str>) -> ClientResult<Bicycle> {
        self.api
            .post_json(BICYCLES_PATH, &BicycleRequest { name, brand })
            .await
    }

    pub async fn update(
        &self,
        bicycle_id: i64,
        name: &str,
        brand: Option<&str>,
    ) -> ClientResult<Bicycle> {
        self.api
            .put_json(&bicycle_path(bicycle_id), &BicycleRequest { name, brand })
            .await
    }

    pub async fn delete(&self, bicycle_id: i64) -> ClientResult<()> {
        self.api.delete(&bicycle_path(bicycle_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::config::ClientConfig;
    use crate::session::SessionContext;

    const BASE: &str = "https://api.test";

    fn repo() -> (BicycleRepository, MockHttpClient) {
        let http = MockHttpClient::new();
        let api = Arc::new(ApiClient::new(
            ClientConfig::new().with_base_url(BASE),
            Arc::new(http.clone()),
            SessionContext::new(),
        ));
        (BicycleRepository::new(api), http)
    }

    #[tokio::test]
    async fn test_list_and_create() {
        let (repo, http) = repo();
        http.set_json_response(
            &format!("{}/bicycles", BASE),
            200,
            r#"[{"id":1,"name":"Gravel","total_km":820.5}]"#,
        );

        let bikes = repo.list().await.unwrap();
        assert_eq!(bikes.len(), 1);
        assert_eq!(bikes[0].name, "Gravel");

        http.set_json_response(
            &format!("{}/bicycles", BASE),
            201,
            r#"{"id":2,"name":"Commuter","brand":"Brompton","total_km":0.0}"#,
        );
        let bike = repo.create("Commuter", Some("Brompton")).await.unwrap();
        assert_eq!(bike.id, 2);
        assert_eq!(http.requests()[1].method, "POST");
    }

    #[tokio::test]
    async fn test_delete_targets_resource_path() {
        let (repo, http) = repo();
        http.set_json_response(&format!("{}/bicycles/7", BASE), 204, "");
        repo.delete(7).await.unwrap();
        assert_eq!(http.requests()[0].method, "DELETE");
        assert_eq!(http.requests()[0].url, format!("{}/bicycles/7", BASE));
    }
}
