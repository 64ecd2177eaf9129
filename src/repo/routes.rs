//! Routes repository, including route-scoped reviews and updates.

use std::sync::Arc;

use crate::api::routes::{
    review_path, reviews_page_path, reviews_path, route_path, routes_page_path,
    search_by_city_path, search_by_rating_path, search_path, update_path, updates_page_path,
    updates_path, ReviewRequest, RouteUpdateRequest,
};
use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{Route, RouteUpdate, Review};
use crate::usecase::FILTER_REQUIRED_MSG;

/// Search filter for routes. Unset is the blank city / zero rating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFilter {
    pub city: String,
    pub min_score: u8,
}

impl RouteFilter {
    /// The city filter, `None` when blank.
    pub fn city(&self) -> Option<&str> {
        let trimmed = self.city.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// True when neither filter is populated.
    pub fn is_empty(&self) -> bool {
        self.city().is_none() && self.min_score == 0
    }
}

/// Repository for routes, reviews, and route updates.
#[derive(Clone)]
pub struct RouteRepository {
    api: Arc<ApiClient>,
}

impl RouteRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// One page of the route listing, cursor-paginated by last-seen id.
    pub async fn page(&self, after_id: Option<i64>) -> ClientResult<Vec<Route>> {
        self.api.get_json(&routes_page_path(after_id)).await
    }

    /// A single route with its server-computed aggregates.
    pub async fn get(&self, route_id: i64) -> ClientResult<Route> {
        self.api.get_json(&route_path(route_id)).await
    }

    /// Search routes, selecting the endpoint variant from which filters are
    /// populated. An empty filter never reaches the network.
    pub async fn search(&self, filter: &RouteFilter) -> ClientResult<Vec<Route>> {
        let path = match (filter.city(), filter.min_score) {
            (None, 0) => return Err(ClientError::Validation(FILTER_REQUIRED_MSG.to_string())),
            (Some(city), 0) => search_by_city_path(city),
            (None, min) => search_by_rating_path(min),
            (Some(city), min) => search_path(city, min),
        };
        self.api.get_json(&path).await
    }

    /// One page of a route's reviews.
    pub async fn reviews_page(
        &self,
        route_id: i64,
        after_id: Option<i64>,
    ) -> ClientResult<Vec<Review>> {
        self.api
            .get_json(&reviews_page_path(route_id, after_id))
            .await
    }

    pub async fn create_review(
        &self,
        route_id: i64,
        score: u8,
        text: &str,
    ) -> ClientResult<Review> {
        self.api
            .post_json(&reviews_path(route_id), &ReviewRequest { score, text })
            .await
    }

    pub async fn update_review(
        &self,
        route_id: i64,
        review_id: i64,
        score: u8,
        text: &str,
    ) -> ClientResult<Review> {
        self.api
            .put_json(
                &review_path(route_id, review_id),
                &ReviewRequest { score, text },
            )
            .await
    }

    pub async fn delete_review(&self, route_id: i64, review_id: i64) -> ClientResult<()> {
        self.api.delete(&review_path(route_id, review_id)).await
    }

    /// One page of a route's updates.
    pub async fn updates_page(
        &self,
        route_id: i64,
        after_id: Option<i64>,
    ) -> ClientResult<Vec<RouteUpdate>> {
        self.api
            .get_json(&updates_page_path(route_id, after_id))
            .await
    }

    pub async fn create_update(&self, route_id: i64, content: &str) -> ClientResult<RouteUpdate> {
        self.api
            .post_json(&updates_path(route_id), &RouteUpdateRequest { content })
            .await
    }

    pub async fn edit_update(
        &self,
        route_id: i64,
        update_id: i64,
        content: &str,
    ) -> ClientResult<RouteUpdate> {
        self.api
            .put_json(
                &update_path(route_id, update_id),
                &RouteUpdateRequest { content },
            )
            .await
    }

    pub async fn delete_update(&self, route_id: i64, update_id: i64) -> ClientResult<()> {
        self.api.delete(&update_path(route_id, update_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::config::ClientConfig;
    use crate::session::SessionContext;

    const BASE: &str = "https://api.test";

    fn repo() -> (RouteRepository, MockHttpClient) {
        let http = MockHttpClient::new();
        let api = Arc::new(ApiClient::new(
            ClientConfig::new().with_base_url(BASE),
            Arc::new(http.clone()),
            SessionContext::new(),
        ));
        (RouteRepository::new(api), http)
    }

    #[test]
    fn test_filter_city_blank_detection() {
        let filter = RouteFilter {
            city: "   ".to_string(),
            min_score: 0,
        };
        assert!(filter.city().is_none());
        assert!(filter.is_empty());
    }

    #[tokio::test]
    async fn test_empty_filter_makes_no_call() {
        let (repo, http) = repo();
        let err = repo.search(&RouteFilter::default()).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_rating_only_selects_rating_endpoint() {
        let (repo, http) = repo();
        http.set_json_response(
            &format!("{}/routes/search/rating?min_score=3", BASE),
            200,
            "[]",
        );
        let filter = RouteFilter {
            city: "".to_string(),
            min_score: 3,
        };
        repo.search(&filter).await.unwrap();
        assert_eq!(
            http.requests()[0].url,
            format!("{}/routes/search/rating?min_score=3", BASE)
        );
    }

    #[tokio::test]
    async fn test_combined_filter_selects_combined_endpoint() {
        let (repo, http) = repo();
        http.set_json_response(
            &format!("{}/routes/search?city=Ghent&min_score=4", BASE),
            200,
            "[]",
        );
        let filter = RouteFilter {
            city: "Ghent".to_string(),
            min_score: 4,
        };
        repo.search(&filter).await.unwrap();
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn test_page_paths_carry_cursor() {
        let (repo, http) = repo();
        http.set_json_response(&format!("{}/routes", BASE), 200, "[]");
        repo.page(None).await.unwrap();
        repo.page(Some(12)).await.unwrap();
        let requests = http.requests();
        assert_eq!(requests[0].url, format!("{}/routes", BASE));
        assert_eq!(requests[1].url, format!("{}/routes?after_id=12", BASE));
    }
}
