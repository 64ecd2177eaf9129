//! Route endpoint shapes, including route-scoped reviews and updates.
//!
//! Route lists are cursor-paginated by last-seen id: `after_id` is absent on
//! the first page and carries the id of the last accumulated item on every
//! subsequent page. The search endpoints are three distinct variants chosen
//! from which filters are populated: city-only, rating-only, or both.

use serde::Serialize;

/// Paged route listing: `GET /routes[?after_id=N]`.
pub fn routes_page_path(after_id: Option<i64>) -> String {
    match after_id {
        Some(id) => format!("/routes?after_id={}", id),
        None => "/routes".to_string(),
    }
}

/// Single route with server-computed aggregates: `GET /routes/{id}`.
pub fn route_path(route_id: i64) -> String {
    format!("/routes/{}", route_id)
}

/// City-only search variant.
pub fn search_by_city_path(city: &str) -> String {
    format!("/routes/search/city?city={}", urlencoding::encode(city))
}

/// Rating-only search variant.
pub fn search_by_rating_path(min_score: u8) -> String {
    format!("/routes/search/rating?min_score={}", min_score)
}

/// Combined search variant, both filters populated.
pub fn search_path(city: &str, min_score: u8) -> String {
    format!(
        "/routes/search?city={}&min_score={}",
        urlencoding::encode(city),
        min_score
    )
}

/// Paged reviews of a route: `GET /routes/{id}/reviews[?after_id=N]`.
pub fn reviews_page_path(route_id: i64, after_id: Option<i64>) -> String {
    match after_id {
        Some(id) => format!("/routes/{}/reviews?after_id={}", route_id, id),
        None => format!("/routes/{}/reviews", route_id),
    }
}

/// Review create target (`POST`) — same path without the review id.
pub fn reviews_path(route_id: i64) -> String {
    format!("/routes/{}/reviews", route_id)
}

/// Review update/delete target (`PUT`/`DELETE`).
pub fn review_path(route_id: i64, review_id: i64) -> String {
    format!("/routes/{}/reviews/{}", route_id, review_id)
}

/// Paged updates of a route: `GET /routes/{id}/updates[?after_id=N]`.
pub fn updates_page_path(route_id: i64, after_id: Option<i64>) -> String {
    match after_id {
        Some(id) => format!("/routes/{}/updates?after_id={}", route_id, id),
        None => format!("/routes/{}/updates", route_id),
    }
}

/// Update create target (`POST`).
pub fn updates_path(route_id: i64) -> String {
    format!("/routes/{}/updates", route_id)
}

/// Update edit/delete target (`PUT`/`DELETE`).
pub fn update_path(route_id: i64, update_id: i64) -> String {
    format!("/routes/{}/updates/{}", route_id, update_id)
}

/// Body for creating or editing a review.
#[derive(Debug, Serialize)]
pub struct ReviewRequest<'a> {
    pub score: u8,
    pub text: &'a str,
}

/// Body for creating or editing a route update.
#[derive(Debug, Serialize)]
pub struct RouteUpdateRequest<'a> {
    pub content: &'a str,
}
