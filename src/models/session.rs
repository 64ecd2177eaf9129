//! The authenticated session record.

use serde::{Deserialize, Serialize};

/// Authenticated identity and bearer token for the current user.
///
/// Held in two places with different lifetimes: the in-memory
/// [`SessionContext`](crate::session::SessionContext) (process lifetime) and
/// the encrypted on-disk record (until logout or explicit clear). The two may
/// transiently diverge: logging in without "remember me" leaves no on-disk
/// copy even though an in-memory session is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent in the Authorization header.
    pub token: String,
    /// Server id of the authenticated user.
    pub user_id: i64,
    /// Display name of the authenticated user.
    pub display_name: String,
    /// Avatar image URL, if the user has one.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Session {
    /// Value for the Authorization header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
