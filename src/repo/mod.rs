//! Repositories: one per domain area.
//!
//! Each repository wraps the [`ApiClient`](crate::api::ApiClient), turning
//! wire responses into domain models and transport failures into displayable
//! [`ClientError`](crate::error::ClientError)s. Reviews and route updates
//! are route-scoped and live on the routes repository.

mod bicycles;
mod components;
mod routes;
mod workshops;

pub use bicycles::BicycleRepository;
pub use components::ComponentRepository;
pub use routes::{RouteFilter, RouteRepository};
pub use workshops::WorkshopRepository;
