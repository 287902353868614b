//! Point-of-sale endpoints.

use serde_json::Value;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /pos/products` — consumable products available at the register.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn pos_products(&self) -> Result<Value, ApiError> {
        self.get_json("/pos/products").await
    }

    /// `POST /pos/preview` — payload: `{ items: [{ id, quantity }] }`.
    /// Prices a cart without committing it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn pos_preview(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/pos/preview", payload).await
    }

    /// `POST /pos/checkout` — commit a cart and produce a bill.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn pos_checkout(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/pos/checkout", payload).await
    }

    /// `GET /pos/bills`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn bills(&self) -> Result<Value, ApiError> {
        self.get_json("/pos/bills").await
    }

    /// `DELETE /pos/bills/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn delete_bill(&self, bill_id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/pos/bills/{bill_id}")).await
    }
}
