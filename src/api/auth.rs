//! Auth endpoint shapes.
//!
//! Login and register are the only unauthenticated calls in the API; session
//! revalidation and logout carry the bearer token.

use serde::{Deserialize, Serialize};

use crate::models::Session;

/// `POST /auth/login` (public).
pub const LOGIN_PATH: &str = "/auth/login";

/// `POST /auth/register` (public).
pub const REGISTER_PATH: &str = "/auth/register";

/// `GET /auth/session` — revalidates the bearer token and returns refreshed
/// session fields.
pub const SESSION_PATH: &str = "/auth/session";

/// `POST /auth/logout` — best-effort server-side notification.
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for registration.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub display_name: &'a str,
}

/// Response from login, register, and session revalidation.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user_id: i64,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl From<SessionResponse> for Session {
    fn from(response: SessionResponse) -> Self {
        Session {
            token: response.token,
            user_id: response.user_id,
            display_name: response.display_name,
            avatar_url: response.avatar_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_shape() {
        let body = serde_json::to_value(LoginRequest {
            email: "a@b.c",
            password: "pw",
        })
        .unwrap();
        assert_eq!(body["email"], "a@b.c");
        assert_eq!(body["password"], "pw");
    }

    #[test]
    fn test_session_response_into_session() {
        let response: SessionResponse =
            serde_json::from_str(r#"{"token":"t","user_id":3,"display_name":"A"}"#).unwrap();
        let session: Session = response.into();
        assert_eq!(session.user_id, 3);
        assert!(session.avatar_url.is_none());
    }
}
