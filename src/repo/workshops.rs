//! Workshops repository.

use std::sync::Arc;

use crate::api::workshops::{nearby_path, workshop_path};
use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::Workshop;

/// Repository for nearby-workshop lookups.
#[derive(Clone)]
pub struct WorkshopRepository {
    api: Arc<ApiClient>,
}

impl WorkshopRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Workshops within `radius_km` of the given coordinates.
    pub async fn nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> ClientResult<Vec<Workshop>> {
        self.api
            .get_json(&nearby_path(latitude, longitude, radius_km))
            .await
    }

    pub async fn get(&self, workshop_id: i64) -> ClientResult<Workshop> {
        self.api.get_json(&workshop_path(workshop_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::config::ClientConfig;
    use crate::session::SessionContext;

    const BASE: &str = "https://api.test";

    #[tokio::test]
    async fn test_nearby_builds_coordinate_query() {
        let http = MockHttpClient::new();
        let api = Arc::new(ApiClient::new(
            ClientConfig::new().with_base_url(BASE),
            Arc::new(http.clone()),
            SessionContext::new(),
        ));
        let repo = WorkshopRepository::new(api);
        http.set_json_response(
            &format!("{}/workshops/nearby?lat=51.05&lng=3.72&radius_km=10", BASE),
            200,
            "[]",
        );
        repo.nearby(51.05, 3.72, 10.0).await.unwrap();
        assert_eq!(http.request_count(), 1);
    }
}
