//! The auth lifecycle state machine.
//!
//! Phases: LoggedOut → AutoLoggingIn → LoggedIn → LoggingOut → LoggedOut.
//!
//! Auto-login fails closed: a stored token the server rejects (401/403) is
//! deleted and the in-memory context cleared. A network failure or a
//! server-side error during auto-login leaves the stored record intact, so
//! a dead link or an outage at launch does not destroy a valid session.

use std::sync::Arc;

use crate::api::auth::{
    LoginRequest, RegisterRequest, SessionResponse, LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH,
    SESSION_PATH,
};
use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::models::Session;
use crate::session::SessionContext;
use crate::traits::SessionStore;

/// Current phase of the auth lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    LoggedOut,
    AutoLoggingIn,
    LoggedIn,
    LoggingOut,
}

/// Result of an auto-login attempt.
///
/// `NoStoredSession` and `Invalidated` are both silent outcomes for the UI;
/// they are kept distinct so the host can choose to tell them apart.
#[derive(Debug, Clone, PartialEq)]
pub enum AutoLoginOutcome {
    /// No usable stored record; nothing was attempted.
    NoStoredSession,
    /// The stored token revalidated; session fields refreshed from the server.
    LoggedIn(Session),
    /// The server rejected the stored token; the record was deleted.
    Invalidated,
    /// The server could not be reached or failed before judging the token;
    /// the stored record was left in place.
    Unreachable(ClientError),
}

/// Orchestrates login, auto-login, and logout across the API, the encrypted
/// store, and the in-memory context.
pub struct SessionManager {
    api: Arc<ApiClient>,
    store: Arc<dyn SessionStore>,
    context: SessionContext,
    phase: AuthPhase,
}

impl SessionManager {
    /// Create a manager. The context must be the same handle the
    /// [`ApiClient`](crate::api::ApiClient) reads tokens from.
    pub fn new(api: Arc<ApiClient>, store: Arc<dyn SessionStore>, context: SessionContext) -> Self {
        Self {
            api,
            store,
            context,
            phase: AuthPhase::LoggedOut,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    /// The session context this manager writes to.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Attempt auto-login from the stored session record at app start.
    pub async fn auto_login(&mut self) -> AutoLoginOutcome {
        let stored = match self.store.load().await {
            Ok(Some(session)) => session,
            Ok(None) => {
                self.phase = AuthPhase::LoggedOut;
                return AutoLoginOutcome::NoStoredSession;
            }
            Err(e) => {
                tracing::warn!(error = %e, "session store unreadable, treating as logged out");
                self.phase = AuthPhase::LoggedOut;
                return AutoLoginOutcome::NoStoredSession;
            }
        };

        self.phase = AuthPhase::AutoLoggingIn;
        // The stored token must be active in the context so the revalidation
        // call carries it.
        self.context.set(stored);

        match self.api.get_json::<SessionResponse>(SESSION_PATH).await {
            Ok(response) => {
                let session = Session::from(response);
                self.context.set(session.clone());
                if let Err(e) = self.store.save(&session).await {
                    tracing::warn!(error = %e, "failed to rewrite refreshed session record");
                }
                self.phase = AuthPhase::LoggedIn;
                tracing::info!(user_id = session.user_id, "auto-login succeeded");
                AutoLoginOutcome::LoggedIn(session)
            }
            Err(err @ ClientError::Auth(_)) => {
                // Token rejected: fail closed.
                if let Err(e) = self.store.clear().await {
                    tracing::warn!(error = %e, "failed to delete rejected session record");
                }
                self.context.clear();
                self.phase = AuthPhase::LoggedOut;
                tracing::info!(error = %err, "stored session invalidated");
                AutoLoginOutcome::Invalidated
            }
            Err(err) => {
                // No response, or the server failed before judging the
                // token. Keep the record for the next launch.
                self.context.clear();
                self.phase = AuthPhase::LoggedOut;
                tracing::warn!(error = %err, "auto-login failed without a token verdict, stored session kept");
                AutoLoginOutcome::Unreachable(err)
            }
        }
    }

    /// Log in with credentials.
    ///
    /// The in-memory session is always set on success. The on-disk record is
    /// written only when `remember_me` is set; otherwise any stale record is
    /// deleted best-effort (a failed deletion does not fail the login).
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> ClientResult<Session> {
        let response: SessionResponse = self
            .api
            .post_json_public(LOGIN_PATH, &LoginRequest { email, password })
            .await?;
        self.establish(Session::from(response), remember_me).await
    }

    /// Register a new account; behaves like login on success.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        display_name: &str,
        remember_me: bool,
    ) -> ClientResult<Session> {
        let response: SessionResponse = self
            .api
            .post_json_public(
                REGISTER_PATH,
                &RegisterRequest {
                    email,
                    password,
                    display_name,
                },
            )
            .await?;
        self.establish(Session::from(response), remember_me).await
    }

    async fn establish(&mut self, session: Session, remember_me: bool) -> ClientResult<Session> {
        self.context.set(session.clone());
        self.phase = AuthPhase::LoggedIn;

        if remember_me {
            if let Err(e) = self.store.save(&session).await {
                tracing::warn!(error = %e, "failed to persist session record");
            }
        } else if let Err(e) = self.store.clear().await {
            tracing::warn!(error = %e, "failed to delete stale session record");
        }
        tracing::info!(user_id = session.user_id, remember_me, "logged in");
        Ok(session)
    }

    /// Log out: clear the in-memory session first, then the stored record,
    /// then notify the server best-effort.
    pub async fn logout(&mut self) -> ClientResult<()> {
        self.phase = AuthPhase::LoggingOut;
        let departing = self.context.snapshot();
        self.context.clear();

        let cleared = self.store.clear().await;
        self.phase = AuthPhase::LoggedOut;

        // Remote notification failure does not fail the logout.
        if let Some(session) = departing {
            if let Err(e) = self
                .api
                .post_unit_with_bearer(LOGOUT_PATH, &session.token)
                .await
            {
                tracing::warn!(error = %e, "server logout notification failed");
            }
        }

        cleared.map_err(|e| ClientError::Transport(e.to_string()))?;
        tracing::info!("logged out");
        Ok(())
    }

    /// Called when the app is backgrounded or resumed.
    ///
    /// A session that was never persisted must not survive suspension: when
    /// no stored record exists, the in-memory session is cleared too.
    pub async fn on_background(&mut self) {
        if !self.store.exists().await && self.context.is_logged_in() {
            tracing::info!("clearing unpersisted session on background");
            self.context.clear();
            self.phase = AuthPhase::LoggedOut;
        }
    }
}
