//! Routes and their route-scoped resources (reviews, updates).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::HasId;

/// A cycling route.
///
/// `average_score` and `review_count` are server-computed aggregates; after
/// any review or update mutation the route must be re-fetched, not patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: i64,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub description: Option<String>,
    pub distance_km: f64,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl HasId for Route {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A user review of a route. Scores run 1 through 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub route_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    pub score: u8,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl HasId for Review {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A journal entry posted on a route (trail conditions, closures, etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteUpdate {
    pub id: i64,
    pub route_id: i64,
    pub user_id: i64,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl HasId for RouteUpdate {
    fn id(&self) -> i64 {
        self.id
    }
}
