//! Review mutation validation.

use std::sync::Arc;

use super::{require_positive_id, RATING_RANGE_MSG};
use crate::error::{ClientError, ClientResult};
use crate::models::Review;
use crate::repo::RouteRepository;

/// Validates review mutations: scores run 1 through 5, ids must be positive.
#[derive(Clone)]
pub struct ManageReviews {
    repo: Arc<RouteRepository>,
}

impl ManageReviews {
    pub fn new(repo: Arc<RouteRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, route_id: i64, score: u8, text: &str) -> ClientResult<Review> {
        require_positive_id(route_id)?;
        validate_score(score)?;
        self.repo.create_review(route_id, score, text).await
    }

    pub async fn update(
        &self,
        route_id: i64,
        review_id: i64,
        score: u8,
        text: &str,
    ) -> ClientResult<Review> {
        require_positive_id(route_id)?;
        require_positive_id(review_id)?;
        validate_score(score)?;
        self.repo
            .update_review(route_id, review_id, score, text)
            .await
    }

    pub async fn delete(&self, route_id: i64, review_id: i64) -> ClientResult<()> {
        require_positive_id(route_id)?;
        require_positive_id(review_id)?;
        self.repo.delete_review(route_id, review_id).await
    }
}

fn validate_score(score: u8) -> ClientResult<()> {
    if (1..=5).contains(&score) {
        Ok(())
    } else {
        Err(ClientError::Validation(RATING_RANGE_MSG.to_string()))
    }
}
