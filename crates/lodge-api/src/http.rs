//! Shared HTTP response helpers.
//!
//! Centralizes the non-success → [`ApiError::Api`] mapping so endpoint
//! modules stay focused on request construction. Runs after the response
//! middleware has observed the status, so the 401/403 teardown has already
//! happened by the time the error is built.

use crate::error::ApiError;

/// Check a response for a non-success status.
///
/// Returns the response unchanged on success; otherwise consumes the body
/// into [`ApiError::Api`] for the caller to interpret.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
