//! Screen view-state.
//!
//! These types hold UI state snapshots and orchestrate repository and
//! use-case calls; they perform no rendering. State is mutated only from the
//! orchestrating task after awaited I/O completes, matching the one-task-
//! per-interaction model of the host UI.

mod garage;
mod modal;
mod pager;
mod route_detail;
mod route_list;
mod workshops;

pub use garage::GarageState;
pub use modal::Modal;
pub use pager::{PageRequest, Pager};
pub use route_detail::RouteDetailState;
pub use route_list::RouteListState;
pub use workshops::WorkshopSearchState;
