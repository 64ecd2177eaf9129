//! Workshop endpoint shapes.

/// Nearby search by coordinates: `GET /workshops/nearby`.
pub fn nearby_path(latitude: f64, longitude: f64, radius_km: f64) -> String {
    format!(
        "/workshops/nearby?lat={}&lng={}&radius_km={}",
        latitude, longitude, radius_km
    )
}

/// Single workshop: `GET /workshops/{id}`.
pub fn workshop_path(workshop_id: i64) -> String {
    format!("/workshops/{}", workshop_id)
}
