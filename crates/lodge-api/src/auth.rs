//! Authentication endpoints: `/login`, `/signup`, `/logout`.
//!
//! These are the only paths the bearer-auth middleware skips — a stale
//! token must never accompany a credential exchange.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use lodge_session::Session;

use crate::{ApiClient, ApiError};

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Backend defaults new accounts to `"user"`.
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// Id of the authenticated account.
    #[serde(alias = "userId")]
    pub user_id: i64,
    /// Primary role, when the backend includes it in the login payload.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct LogoutRequest<'a> {
    user_id: &'a str,
}

impl ApiClient {
    /// `POST /signup` — create an account. Does not start a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// signup (e.g. duplicate email).
    pub async fn signup(&self, request: &SignupRequest) -> Result<Value, ApiError> {
        self.post_json("/signup", request).await
    }

    /// `POST /login` — exchange credentials for a bearer token.
    ///
    /// On success the session store is written (token and user id together)
    /// before the response is returned, so the very next request carries the
    /// new credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, credentials are rejected,
    /// or the session cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .post_json("/login", &LoginRequest { email, password })
            .await?;

        self.session()
            .store(&Session::new(&response.token, response.user_id.to_string()))?;

        Ok(response)
    }

    /// Log out: record the logout in the backend audit log, then clear the
    /// local session and notify subscribers.
    ///
    /// The audit call is best-effort — a failure is logged and does not keep
    /// the local session alive.
    pub async fn logout(&self) {
        if let Some(user_id) = self.session().user_id() {
            let result: Result<Value, ApiError> = self
                .post_json("/logout", &LogoutRequest { user_id: &user_id })
                .await;
            if let Err(error) = result {
                tracing::warn!(%error, "logout audit call failed; clearing session anyway");
            }
        }
        self.session().logout();
    }
}
