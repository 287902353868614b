//! Explicit request/response middleware chain.
//!
//! Cross-cutting behavior around [`crate::ApiClient::send`] lives here as an
//! ordered list of named hooks rather than implicit closures: pre-request
//! hooks may mutate (or reject) the outgoing request, post-response hooks
//! observe every response status. The two stock hooks are [`BearerAuth`]
//! (token injection, skipped for auth endpoints) and [`SessionTeardown`]
//! (401/403 → clear session, broadcast invalidation).

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use lodge_session::SessionStore;

use crate::error::ApiError;

/// Paths identifying authentication endpoints. These never receive a stale
/// `Authorization` header.
const AUTH_ENDPOINT_SUFFIXES: [&str; 2] = ["/login", "/signup"];

/// Whether a request path targets an authentication endpoint.
pub(crate) fn is_auth_endpoint(path: &str) -> bool {
    AUTH_ENDPOINT_SUFFIXES
        .iter()
        .any(|suffix| path.ends_with(suffix))
}

/// Runs immediately before a request is dispatched. May mutate the request;
/// an error rejects the send without dispatching.
pub trait RequestHook: Send + Sync {
    /// Hook name, for logs.
    fn name(&self) -> &'static str;

    /// Inspect and optionally mutate the outgoing request.
    ///
    /// # Errors
    ///
    /// Returning an error aborts the send; the error propagates to the
    /// caller unchanged.
    fn before_send(&self, request: &mut reqwest::Request) -> Result<(), ApiError>;
}

/// Runs on every response, successful or not, before status checking.
/// Observational only — hooks cannot rewrite the response.
pub trait ResponseHook: Send + Sync {
    /// Hook name, for logs.
    fn name(&self) -> &'static str;

    /// Observe the response status for the given request path.
    fn on_status(&self, path: &str, status: StatusCode);
}

/// Attaches the stored session token as a bearer credential.
///
/// Leaves the request untouched when no token is stored or when the target
/// is an auth endpoint.
pub struct BearerAuth {
    session: SessionStore,
}

impl BearerAuth {
    #[must_use]
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl RequestHook for BearerAuth {
    fn name(&self) -> &'static str {
        "bearer-auth"
    }

    fn before_send(&self, request: &mut reqwest::Request) -> Result<(), ApiError> {
        if is_auth_endpoint(request.url().path()) {
            return Ok(());
        }
        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                ApiError::InvalidRequest(format!("stored token is not a valid header value: {e}"))
            })?;
            request.headers_mut().insert(AUTHORIZATION, value);
        }
        Ok(())
    }
}

/// Tears down the session on 401/403 responses.
///
/// The only place reactive invalidation happens: clears the store
/// (idempotent) and broadcasts [`lodge_session::SessionEvent::Invalidated`]
/// for the app shell to act on. Every other status passes through.
pub struct SessionTeardown {
    session: SessionStore,
}

impl SessionTeardown {
    #[must_use]
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl ResponseHook for SessionTeardown {
    fn name(&self) -> &'static str {
        "session-teardown"
    }

    fn on_status(&self, path: &str, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(
                path,
                status = status.as_u16(),
                "backend rejected session credentials — tearing down session"
            );
            self.session.invalidate(status.as_u16());
        }
    }
}

#[cfg(test)]
mod tests {
    use lodge_session::{Session, SessionEvent};
    use pretty_assertions::assert_eq;

    use super::*;

    fn request(path: &str) -> reqwest::Request {
        reqwest::Client::new()
            .get(format!("http://127.0.0.1:5000{path}"))
            .build()
            .expect("request should build")
    }

    fn store_with_token(tmp: &tempfile::TempDir) -> SessionStore {
        let store = SessionStore::file_backed(tmp.path());
        store
            .store(&Session::new("tok_abc123", "42"))
            .expect("store");
        store
    }

    #[test]
    fn auth_endpoint_detection() {
        assert!(is_auth_endpoint("/login"));
        assert!(is_auth_endpoint("/signup"));
        assert!(!is_auth_endpoint("/rooms"));
        assert!(!is_auth_endpoint("/login-history"));
    }

    #[test]
    fn bearer_auth_attaches_stored_token() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let hook = BearerAuth::new(store_with_token(&tmp));

        let mut req = request("/rooms");
        hook.before_send(&mut req).expect("hook");
        assert_eq!(
            req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer tok_abc123")
        );
    }

    #[test]
    fn bearer_auth_skips_auth_endpoints() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let hook = BearerAuth::new(store_with_token(&tmp));

        for path in ["/login", "/signup"] {
            let mut req = request(path);
            hook.before_send(&mut req).expect("hook");
            assert!(
                req.headers().get(AUTHORIZATION).is_none(),
                "{path} must not carry a bearer header"
            );
        }
    }

    #[test]
    fn bearer_auth_noop_without_token() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let hook = BearerAuth::new(SessionStore::file_backed(tmp.path()));

        let mut req = request("/rooms");
        hook.before_send(&mut req).expect("hook");
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn teardown_clears_session_on_401_and_403() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let tmp = tempfile::TempDir::new().expect("tmp dir");
            let session = store_with_token(&tmp);
            let mut rx = session.subscribe();

            let hook = SessionTeardown::new(session.clone());
            hook.on_status("/pos/bills", status);

            assert!(!session.is_authenticated());
            assert_eq!(
                rx.try_recv().expect("event"),
                SessionEvent::Invalidated {
                    status: status.as_u16()
                }
            );
        }
    }

    #[test]
    fn teardown_ignores_other_failures() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let session = store_with_token(&tmp);
        let mut rx = session.subscribe();

        let hook = SessionTeardown::new(session.clone());
        hook.on_status("/rooms", StatusCode::NOT_FOUND);
        hook.on_status("/rooms", StatusCode::INTERNAL_SERVER_ERROR);
        hook.on_status("/rooms", StatusCode::OK);

        assert!(session.is_authenticated());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn teardown_is_idempotent_on_repeat_failures() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let session = store_with_token(&tmp);

        let hook = SessionTeardown::new(session.clone());
        hook.on_status("/rooms", StatusCode::UNAUTHORIZED);
        hook.on_status("/rooms", StatusCode::UNAUTHORIZED);
        assert!(!session.is_authenticated());
    }
}
