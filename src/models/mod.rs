//! Domain entities mirroring server resources.
//!
//! All records are plain immutable data. Server-computed aggregates (average
//! review score, counts) are carried as-is and re-fetched after mutations,
//! never recomputed client-side.

mod bicycle;
mod route;
mod session;
mod workshop;

pub use bicycle::{Bicycle, BicycleComponent};
pub use route::{Route, RouteUpdate, Review};
pub use session::Session;
pub use workshop::Workshop;

/// Entities addressable by a numeric server id.
///
/// Cursor pagination and duplicate suppression key off this id.
pub trait HasId {
    fn id(&self) -> i64;
}
