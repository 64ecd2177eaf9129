//! Route detail screen state: the route aggregate, its reviews, and its
//! updates, with modal-driven mutations.
//!
//! Review and update mutations change server-computed aggregates
//! (`average_score`, `review_count`), so every successful mutation re-fetches
//! the parent route rather than patching it locally.

use std::sync::Arc;

use crate::error::{ClientError, ClientResult};
use crate::models::{Route, RouteUpdate, Review};
use crate::repo::RouteRepository;
use crate::usecase::{ManageReviews, ManageRouteUpdates};
use crate::view_state::{Modal, Pager};

/// State of the route detail screen.
pub struct RouteDetailState {
    repo: Arc<RouteRepository>,
    reviews_uc: ManageReviews,
    updates_uc: ManageRouteUpdates,
    route: Route,
    reviews: Pager<Review>,
    updates: Pager<RouteUpdate>,
    pub review_modal: Modal<Review>,
    pub update_modal: Modal<RouteUpdate>,
}

impl RouteDetailState {
    /// Open the detail screen for a route. Fetches the route and the first
    /// page of both its reviews and its updates.
    pub async fn open(repo: Arc<RouteRepository>, route_id: i64) -> ClientResult<Self> {
        let route = repo.get(route_id).await?;
        let mut state = Self {
            reviews_uc: ManageReviews::new(Arc::clone(&repo)),
            updates_uc: ManageRouteUpdates::new(Arc::clone(&repo)),
            repo,
            route,
            reviews: Pager::new(),
            updates: Pager::new(),
            review_modal: Modal::None,
            update_modal: Modal::None,
        };
        state.load_more_reviews().await;
        state.load_more_updates().await;
        Ok(state)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn reviews(&self) -> &Pager<Review> {
        &self.reviews
    }

    pub fn updates(&self) -> &Pager<RouteUpdate> {
        &self.updates
    }

    pub async fn load_more_reviews(&mut self) {
        let Some(request) = self.reviews.begin() else {
            return;
        };
        let page = self.repo.reviews_page(self.route.id, request.after_id).await;
        self.reviews.complete(page);
    }

    pub async fn load_more_updates(&mut self) {
        let Some(request) = self.updates.begin() else {
            return;
        };
        let page = self.repo.updates_page(self.route.id, request.after_id).await;
        self.updates.complete(page);
    }

    /// Submit the open review modal: create when [`Modal::Create`], save when
    /// [`Modal::Edit`]. Closes the modal and refreshes reviews and the route
    /// aggregates on success; a failure leaves the modal open for retry.
    pub async fn submit_review(&mut self, score: u8, text: &str) -> ClientResult<()> {
        let route_id = self.route.id;
        match &self.review_modal {
            Modal::Create => {
                self.reviews_uc.create(route_id, score, text).await?;
            }
            Modal::Edit(review) => {
                let review_id = review.id;
                self.reviews_uc
                    .update(route_id, review_id, score, text)
                    .await?;
            }
            Modal::None | Modal::Delete(_) => {
                return Err(ClientError::Validation("no review form open".to_string()));
            }
        }
        self.review_modal.close();
        self.refresh_reviews().await
    }

    /// Confirm the open delete-review modal.
    pub async fn confirm_delete_review(&mut self) -> ClientResult<()> {
        let Modal::Delete(review) = &self.review_modal else {
            return Err(ClientError::Validation(
                "no delete confirmation open".to_string(),
            ));
        };
        let review_id = review.id;
        self.reviews_uc.delete(self.route.id, review_id).await?;
        self.review_modal.close();
        self.refresh_reviews().await
    }

    /// Submit the open update modal, mirroring [`Self::submit_review`].
    pub async fn submit_update(&mut self, content: &str) -> ClientResult<()> {
        let route_id = self.route.id;
        match &self.update_modal {
            Modal::Create => {
                self.updates_uc.create(route_id, content).await?;
            }
            Modal::Edit(update) => {
                let update_id = update.id;
                self.updates_uc.edit(route_id, update_id, content).await?;
            }
            Modal::None | Modal::Delete(_) => {
                return Err(ClientError::Validation("no update form open".to_string()));
            }
        }
        self.update_modal.close();
        self.refresh_updates().await
    }

    /// Confirm the open delete-update modal.
    pub async fn confirm_delete_update(&mut self) -> ClientResult<()> {
        let Modal::Delete(update) = &self.update_modal else {
            return Err(ClientError::Validation(
                "no delete confirmation open".to_string(),
            ));
        };
        let update_id = update.id;
        self.updates_uc.delete(self.route.id, update_id).await?;
        self.update_modal.close();
        self.refresh_updates().await
    }

    async fn refresh_reviews(&mut self) -> ClientResult<()> {
        self.reviews.reset();
        self.load_more_reviews().await;
        self.refetch_route().await
    }

    async fn refresh_updates(&mut self) -> ClientResult<()> {
        self.updates.reset();
        self.load_more_updates().await;
        self.refetch_route().await
    }

    async fn refetch_route(&mut self) -> ClientResult<()> {
        self.route = self.repo.get(self.route.id).await?;
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

    const BASE: &str = "https://api.test";

    fn repo() -> (Arc<RouteRepository>, MockHttpClient) {
        let http = MockHttpClient::new();
        let api = Arc::new(ApiClient::new(
            ClientConfig::new().with_base_url(BASE),
            Arc::new(http.clone()),
            SessionContext::new(),
        ));
        (Arc::new(RouteRepository::new(api)), http)
    }

    fn route_json(average: f64, count: u32) -> String {
        format!(
            r#"{{"id":1,"name":"Loop","city":"Ghent","distance_km":42.0,"average_score":{average},"review_count":{count}}}"#
        )
    }

    fn stub_route(http: &MockHttpClient, average: f64, count: u32) {
        http.set_json_response(&format!("{}/routes/1", BASE), 200, &route_json(average, count));
    }

    async fn open(http: &MockHttpClient, repo: &Arc<RouteRepository>) -> RouteDetailState {
        stub_route(http, 4.0, 1);
        http.set_json_response(&format!("{}/routes/1/reviews", BASE), 200, "[]");
        http.set_json_response(&format!("{}/routes/1/updates", BASE), 200, "[]");
        RouteDetailState::open(Arc::clone(repo), 1).await.unwrap()
    }

    #[tokio::test]
    async fn test_open_loads_route_and_first_pages() {
        let (repo, http) = repo();
        let state = open(&http, &repo).await;
        assert_eq!(state.route().id, 1);
        assert!(!state.reviews().has_more());
        assert!(!state.updates().has_more());
        assert_eq!(http.request_count(), 3);
    }

    #[tokio::test]
    async fn test_review_submit_refetches_route_aggregates() {
        let (repo, http) = repo();
        let mut state = open(&http, &repo).await;

        http.set_json_response(
            &format!("{}/routes/1/reviews", BASE),
            201,
            r#"{"id":10,"route_id":1,"user_id":2,"score":5,"text":"great"}"#,
        );
        // Aggregates move server-side once the review lands.
        stub_route(&http, 4.5, 2);

        state.review_modal = Modal::Create;
        state.submit_review(5, "great").await.unwrap();

        assert_eq!(state.route().review_count, 2);
        assert!((state.route().average_score - 4.5).abs() < 1e-9);
        assert_eq!(state.review_modal, Modal::None);
    }

    #[tokio::test]
    async fn test_delete_review_refetches_route() {
        let (repo, http) = repo();
        let mut state = open(&http, &repo).await;

        http.set_json_response(&format!("{}/routes/1/reviews/10", BASE), 204, "");
        stub_route(&http, 0.0, 0);

        state.review_modal = Modal::Delete(Review {
            id: 10,
            route_id: 1,
            user_id: 2,
            user_name: None,
            score: 4,
            text: "old".to_string(),
            created_at: None,
        });
        state.confirm_delete_review().await.unwrap();

        assert_eq!(state.route().review_count, 0);
        assert_eq!(state.review_modal, Modal::None);
    }

    #[tokio::test]
    async fn test_submit_without_open_modal_is_rejected() {
        let (repo, http) = repo();
        let mut state = open(&http, &repo).await;
        let before = http.request_count();
        assert!(state.submit_review(5, "x").await.is_err());
        assert!(state.submit_update("x").await.is_err());
        assert_eq!(http.request_count(), before);
    }

    #[tokio::test]
    async fn test_invalid_score_leaves_modal_open() {
        let (repo, http) = repo();
        let mut state = open(&http, &repo).await;
        state.review_modal = Modal::Create;
        assert!(state.submit_review(0, "x").await.is_err());
        assert_eq!(state.review_modal, Modal::Create);
    }
}
