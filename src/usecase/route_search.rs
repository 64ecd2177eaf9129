//! Route search validation.

use std::sync::Arc;

use super::FILTER_REQUIRED_MSG;
use crate::error::{ClientError, ClientResult};
use crate::models::Route;
use crate::repo::{RouteFilter, RouteRepository};

/// Validates the search filter before the repository is consulted: at least
/// one of city (non-blank) or minimum rating (> 0) must be set.
#[derive(Clone)]
pub struct SearchRoutes {
    repo: Arc<RouteRepository>,
}

impl SearchRoutes {
    pub fn new(repo: Arc<RouteRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, filter: &RouteFilter) -> ClientResult<Vec<Route>> {
        if filter.is_empty() {
            return Err(ClientError::Validation(FILTER_REQUIRED_MSG.to_string()));
        }
        self.repo.search(filter).await
    }
}
