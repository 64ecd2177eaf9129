//! Session lifecycle: the in-memory session context and the auth state
//! machine driving login, auto-login, and logout.

mod context;
mod manager;

pub use context::SessionContext;
pub use manager::{AuthPhase, AutoLoginOutcome, SessionManager};
