//! Dashboard, analytics, and inventory report endpoints.

use serde_json::Value;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /dashboard` — front-desk summary tiles.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn dashboard(&self) -> Result<Value, ApiError> {
        self.get_json("/dashboard").await
    }

    /// `GET /analytics/popular-rooms` — `mode` is `weekly`, `monthly`, or
    /// `yearly`; `period_key` selects a specific period (e.g.
    /// `W-2025-10-07_2025-10-13`), empty means current.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn popular_rooms(
        &self,
        mode: &str,
        period_key: Option<&str>,
        limit: u32,
    ) -> Result<Value, ApiError> {
        let mut query = vec![("mode", mode.to_string()), ("limit", limit.to_string())];
        if let Some(key) = period_key {
            query.push(("period_key", key.to_string()));
        }
        self.get_with_query("/analytics/popular-rooms", &query).await
    }

    /// `GET /transaction-history` — the authenticated guest's transactions.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Friendly`] with the backend's message or
    /// "Failed to fetch transaction history".
    pub async fn transaction_history(&self) -> Result<Value, ApiError> {
        self.get_json("/transaction-history")
            .await
            .map_err(|e| e.friendly("Failed to fetch transaction history"))
    }

    /// `GET /transaction-summary` — aggregate spend/booking statistics for
    /// the authenticated guest.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Friendly`] with the backend's message or
    /// "Failed to fetch transaction summary".
    pub async fn transaction_summary(&self) -> Result<Value, ApiError> {
        self.get_json("/transaction-summary")
            .await
            .map_err(|e| e.friendly("Failed to fetch transaction summary"))
    }

    // ── Inventory reports ──────────────────────────────────────────────

    /// `GET /stats/low-stock`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn low_stock_report(&self) -> Result<Value, ApiError> {
        self.get_json("/stats/low-stock").await
    }

    /// `GET /stats/stock-history`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn stock_history(&self) -> Result<Value, ApiError> {
        self.get_json("/stats/stock-history").await
    }

    /// `GET /stats/expired-items`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn expired_items(&self) -> Result<Value, ApiError> {
        self.get_json("/stats/expired-items").await
    }

    /// `GET /stats/damaged-items`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn damaged_items(&self) -> Result<Value, ApiError> {
        self.get_json("/stats/damaged-items").await
    }
}
