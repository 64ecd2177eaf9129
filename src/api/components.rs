//! Bicycle component endpoint shapes. Components are bicycle-scoped.

use serde::Serialize;

/// `GET`/`POST /bicycles/{id}/components`.
pub fn components_path(bicycle_id: i64) -> String {
    format!("/bicycles/{}/components", bicycle_id)
}

/// `PUT`/`DELETE /bicycles/{id}/components/{id}`.
pub fn component_path(bicycle_id: i64, component_id: i64) -> String {
    format!("/bicycles/{}/components/{}", bicycle_id, component_id)
}

/// Body for creating or editing a component.
#[derive(Debug, Serialize)]
pub struct ComponentRequest<'a> {
    pub name: &'a str,
    pub current_kilometers: f64,
    pub max_kilometers: f64,
}
