//! Inventory and product endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct ProductIdPayload {
    product_id: i64,
}

#[derive(Serialize)]
struct SerialGenerationPayload {
    product_id: i64,
    quantity: u32,
}

impl ApiClient {
    /// `POST /add-item` — register a new inventory item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn add_item(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/add-item", payload).await
    }

    /// `GET /products`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn products(&self) -> Result<Value, ApiError> {
        self.get_json("/products").await
    }

    /// `POST /products/add`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn add_product(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/products/add", payload).await
    }

    /// `GET /product/{id}/current-quantity`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn current_quantity(&self, product_id: i64) -> Result<Value, ApiError> {
        self.get_json(&format!("/product/{product_id}/current-quantity")).await
    }

    /// `POST /generate-batch-number`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn generate_batch_number(&self, product_id: i64) -> Result<Value, ApiError> {
        self.post_json("/generate-batch-number", &ProductIdPayload { product_id })
            .await
    }

    /// `POST /generate-serial-numbers`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn generate_serial_numbers(
        &self,
        product_id: i64,
        quantity: u32,
    ) -> Result<Value, ApiError> {
        self.post_json(
            "/generate-serial-numbers",
            &SerialGenerationPayload {
                product_id,
                quantity,
            },
        )
        .await
    }

    // ── Manage items ───────────────────────────────────────────────────

    /// `GET /manage-items`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn manage_items(&self) -> Result<Value, ApiError> {
        self.get_json("/manage-items").await
    }

    /// `PUT /manage-items/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn update_item(&self, item_id: i64, payload: &Value) -> Result<Value, ApiError> {
        self.put_json(&format!("/manage-items/{item_id}"), payload).await
    }

    /// `DELETE /manage-items/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn delete_item(&self, item_id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/manage-items/{item_id}")).await
    }
}
