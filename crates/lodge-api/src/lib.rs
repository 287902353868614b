//! # lodge-api
//!
//! HTTP client for the hotel PMS backend.
//!
//! One configured [`ApiClient`] per app, one thin async function per backend
//! endpoint, grouped per resource module:
//! - `auth` — login, signup, logout audit
//! - `rooms` — rooms, categories, types, rates, amenities, serial numbers,
//!   room state transitions
//! - `bookings` — staff bookings plus the guest-facing subset
//! - `pos` — point-of-sale products, preview, checkout, bills
//! - `inventory` — items, products, batch/serial generation
//! - `discounts` — discount CRUD
//! - `users` — account administration and the current-user lookup
//! - `damage` — damage reports
//! - `stats` — dashboard, analytics, inventory reports
//!
//! Every call goes through [`ApiClient::send`], which applies the explicit
//! middleware chain: pre-request hooks (bearer-token injection) and
//! post-response hooks (401/403 session teardown). Endpoint functions
//! pass the parsed response body through unchanged — no retry, no caching.

pub mod auth;
pub mod bookings;
pub mod damage;
pub mod discounts;
pub mod inventory;
pub mod middleware;
pub mod pos;
pub mod rooms;
pub mod stats;
pub mod users;

mod error;
mod http;

pub use error::ApiError;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use lodge_config::ApiConfig;
use lodge_session::SessionStore;

use crate::http::check_response;
use crate::middleware::{BearerAuth, RequestHook, ResponseHook, SessionTeardown};

/// HTTP client for the PMS backend.
///
/// Holds the base endpoint, the shared session store, and the ordered
/// middleware chain. Cheap to share behind an `Arc`.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    request_hooks: Vec<Arc<dyn RequestHook>>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
}

impl ApiClient {
    /// Create a client with the stock middleware chain:
    /// `[bearer-auth]` before send, `[session-teardown]` after receive.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &ApiConfig, session: SessionStore) -> Self {
        let request_hooks: Vec<Arc<dyn RequestHook>> =
            vec![Arc::new(BearerAuth::new(session.clone()))];
        let response_hooks: Vec<Arc<dyn ResponseHook>> =
            vec![Arc::new(SessionTeardown::new(session.clone()))];
        Self::with_hooks(config, session, request_hooks, response_hooks)
    }

    /// Create a client with an explicit middleware chain.
    ///
    /// Hooks run in list order; an empty list disables that stage. Intended
    /// for tests and embedders that need extra cross-cutting behavior.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn with_hooks(
        config: &ApiConfig,
        session: SessionStore,
        request_hooks: Vec<Arc<dyn RequestHook>>,
        response_hooks: Vec<Arc<dyn ResponseHook>>,
    ) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("lodge/0.1")
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            request_hooks,
            response_hooks,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store this client injects tokens from and tears down.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Dispatch a built request through the middleware chain.
    ///
    /// Pre-request hooks run in order and may reject the send. After the
    /// network round trip, post-response hooks observe the status, then a
    /// non-success status is mapped to [`ApiError::Api`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on hook rejection, transport failure, or a
    /// non-success status.
    pub async fn send(&self, mut request: reqwest::Request) -> Result<reqwest::Response, ApiError> {
        let path = request.url().path().to_string();
        for hook in &self.request_hooks {
            hook.before_send(&mut request).map_err(|error| {
                tracing::debug!(hook = hook.name(), %error, "request hook rejected send");
                error
            })?;
        }

        let response = self.http.execute(request).await?;

        let status = response.status();
        for hook in &self.response_hooks {
            hook.on_status(&path, status);
        }

        check_response(response).await
    }

    // ── Request helpers (one per method/payload shape) ─────────────────

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path)).build()?;
        Ok(self.send(request).await?.json().await?)
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path)).query(query).build()?;
        Ok(self.send(request).await?.json().await?)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).json(body).build()?;
        Ok(self.send(request).await?.json().await?)
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.http.post(self.url(path)).build()?;
        Ok(self.send(request).await?.json().await?)
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let request = self.http.post(self.url(path)).multipart(form).build()?;
        Ok(self.send(request).await?.json().await?)
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.put(self.url(path)).json(body).build()?;
        Ok(self.send(request).await?.json().await?)
    }

    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.http.put(self.url(path)).build()?;
        Ok(self.send(request).await?.json().await?)
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let request = self.http.delete(self.url(path)).build()?;
        Ok(self.send(request).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let config = ApiConfig {
            base_url: "http://127.0.0.1:5000/".to_string(),
            timeout_secs: 10,
        };
        let client = ApiClient::new(&config, SessionStore::file_backed(tmp.path()));
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
        assert_eq!(client.url("/rooms"), "http://127.0.0.1:5000/rooms");
    }

    #[test]
    fn with_hooks_accepts_empty_chain() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let client = ApiClient::with_hooks(
            &ApiConfig::default(),
            SessionStore::file_backed(tmp.path()),
            Vec::new(),
            Vec::new(),
        );
        assert!(client.request_hooks.is_empty());
        assert!(client.response_hooks.is_empty());
    }
}
