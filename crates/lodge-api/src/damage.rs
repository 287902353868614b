//! Damage report endpoints.

use serde_json::Value;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /damage-reports`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn damage_reports(&self) -> Result<Value, ApiError> {
        self.get_json("/damage-reports").await
    }

    /// `POST /damage-reports` — payload: `{ room_id, item, description, cost? }`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn report_damage(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/damage-reports", payload).await
    }

    /// `PUT /damage-reports/{id}/resolve`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn resolve_damage_report(&self, report_id: i64) -> Result<Value, ApiError> {
        self.put_empty(&format!("/damage-reports/{report_id}/resolve")).await
    }

    /// `DELETE /damage-reports/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn delete_damage_report(&self, report_id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/damage-reports/{report_id}")).await
    }
}
