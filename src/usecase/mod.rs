//! Use cases: thin validation wrappers in front of repository calls.
//!
//! Every rejection here is synchronous, side-effect-free, and carries a
//! fixed message; nothing leaves the device. Valid input is forwarded to the
//! repository untouched.

mod components;
mod reviews;
mod route_search;
mod route_updates;

pub use components::ManageComponents;
pub use reviews::ManageReviews;
pub use route_search::SearchRoutes;
pub use route_updates::ManageRouteUpdates;

/// Rejection for an empty route search filter.
pub const FILTER_REQUIRED_MSG: &str = "enter a city or a minimum rating to search";

/// Rejection for an out-of-range review score.
pub const RATING_RANGE_MSG: &str = "rating must be between 1 and 5";

/// Rejection for a non-positive entity id.
pub const INVALID_ID_MSG: &str = "invalid id";

/// Rejection for blank route update content.
pub const UPDATE_CONTENT_MSG: &str = "update text must not be empty";

/// Rejection for a blank component name.
pub const COMPONENT_NAME_MSG: &str = "component name must not be empty";

/// Rejection for a non-positive component service interval.
pub const COMPONENT_INTERVAL_MSG: &str = "service interval must be greater than zero";

/// Rejection for negative component mileage.
pub const COMPONENT_KM_MSG: &str = "kilometers must not be negative";

pub(crate) fn require_positive_id(id: i64) -> Result<(), crate::error::ClientError> {
    if id > 0 {
        Ok(())
    } else {
        Err(crate::error::ClientError::Validation(
            INVALID_ID_MSG.to_string(),
        ))
    }
}
