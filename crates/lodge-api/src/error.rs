//! API error types.

use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`] calls.
///
/// Only 401/403 get cross-cutting treatment (session teardown, handled in
/// the response middleware before this error reaches the caller). Every
/// other failure is the caller's to interpret.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (no response received).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, typically `{"error": "..."}`.
        message: String,
    },

    /// Caller-facing message rewrapped by the guest-booking endpoints.
    #[error("{0}")]
    Friendly(String),

    /// A request could not be constructed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Session store failure while persisting login credentials.
    #[error(transparent)]
    Session(#[from] lodge_session::SessionError),
}

impl ApiError {
    /// HTTP status of an `Api` error, if that is what this is.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Rewrap into a caller-friendly message.
    ///
    /// Uses the backend's `{"error": ...}` body when present, otherwise the
    /// given fallback. Used by the guest-facing booking endpoints only.
    #[must_use]
    pub(crate) fn friendly(self, fallback: &str) -> Self {
        if let Self::Api { message, .. } = &self
            && let Ok(body) = serde_json::from_str::<serde_json::Value>(message)
            && let Some(error) = body.get("error").and_then(|v| v.as_str())
        {
            return Self::Friendly(error.to_string());
        }
        Self::Friendly(fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friendly_extracts_backend_error_field() {
        let err = ApiError::Api {
            status: 409,
            message: r#"{"error": "Room already booked for those dates"}"#.to_string(),
        };
        let friendly = err.friendly("Failed to create booking");
        assert_eq!(
            friendly.to_string(),
            "Room already booked for those dates"
        );
    }

    #[test]
    fn friendly_falls_back_on_non_json_body() {
        let err = ApiError::Api {
            status: 500,
            message: "<html>Internal Server Error</html>".to_string(),
        };
        let friendly = err.friendly("Failed to create booking");
        assert_eq!(friendly.to_string(), "Failed to create booking");
    }

    #[test]
    fn friendly_falls_back_on_transport_error_shape() {
        let err = ApiError::InvalidRequest("bad header".into());
        let friendly = err.friendly("Failed to fetch available rooms");
        assert_eq!(friendly.to_string(), "Failed to fetch available rooms");
    }

    #[test]
    fn status_only_set_for_api_errors() {
        let err = ApiError::Api {
            status: 403,
            message: String::new(),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(ApiError::InvalidRequest("x".into()).status(), None);
    }
}
