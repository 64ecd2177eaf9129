//! Bicycle endpoint shapes.

use serde::Serialize;

/// `GET`/`POST /bicycles`.
pub const BICYCLES_PATH: &str = "/bicycles";

/// `GET`/`PUT`/`DELETE /bicycles/{id}`.
pub fn bicycle_path(bicycle_id: i64) -> String {
    format!("/bicycles/{}", bicycle_id)
}

/// Body for creating or editing a bicycle.
#[derive(Debug, Serialize)]
pub struct BicycleRequest<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<&'a str>,
}
