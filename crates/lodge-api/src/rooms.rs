//! Room, category, type, rate, and amenity endpoints.
//!
//! Response and payload shapes are backend-defined JSON passed through
//! unchanged; payload keys are noted where the backend is picky.

use serde_json::Value;

use crate::{ApiClient, ApiError};

impl ApiClient {
    // ── Room categories ────────────────────────────────────────────────

    /// `GET /room-categories`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn room_categories(&self) -> Result<Value, ApiError> {
        self.get_json("/room-categories").await
    }

    /// `POST /room-categories`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn add_room_category(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/room-categories", payload).await
    }

    /// `PUT /room-categories/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn update_room_category(&self, id: i64, payload: &Value) -> Result<Value, ApiError> {
        self.put_json(&format!("/room-categories/{id}"), payload).await
    }

    /// `DELETE /room-categories/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn delete_room_category(&self, id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/room-categories/{id}")).await
    }

    // ── Room types ─────────────────────────────────────────────────────

    /// `GET /room-types`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn room_types(&self) -> Result<Value, ApiError> {
        self.get_json("/room-types").await
    }

    /// `POST /room-types`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn add_room_type(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/room-types", payload).await
    }

    /// `PUT /room-types/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn update_room_type(&self, id: i64, payload: &Value) -> Result<Value, ApiError> {
        self.put_json(&format!("/room-types/{id}"), payload).await
    }

    /// `DELETE /room-types/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn delete_room_type(&self, id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/room-types/{id}")).await
    }

    /// `POST /room-types/{id}/discount` — payload: `{ percent, starts_at?, ends_at? }`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn apply_room_type_discount(
        &self,
        id: i64,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.post_json(&format!("/room-types/{id}/discount"), payload).await
    }

    /// `DELETE /room-types/{id}/discount`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn remove_room_type_discount(&self, id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/room-types/{id}/discount")).await
    }

    /// `GET /room-type/{id}/rates`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn room_type_rates(&self, type_id: i64) -> Result<Value, ApiError> {
        self.get_json(&format!("/room-type/{type_id}/rates")).await
    }

    // ── Rooms ──────────────────────────────────────────────────────────

    /// `GET /rooms`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn rooms(&self) -> Result<Value, ApiError> {
        self.get_json("/rooms").await
    }

    /// `POST /add-room` — multipart: room fields plus image parts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn add_room(&self, form: reqwest::multipart::Form) -> Result<Value, ApiError> {
        self.post_multipart("/add-room", form).await
    }

    /// `POST /rooms/{id}/upload-image` — multipart image upload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn upload_room_image(
        &self,
        room_id: i64,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        self.post_multipart(&format!("/rooms/{room_id}/upload-image"), form).await
    }

    /// `PUT /rooms/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn update_room(&self, room_id: i64, payload: &Value) -> Result<Value, ApiError> {
        self.put_json(&format!("/rooms/{room_id}"), payload).await
    }

    /// `DELETE /rooms/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn delete_room(&self, room_id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/rooms/{room_id}")).await
    }

    // ── Room state transitions ─────────────────────────────────────────

    /// `PUT /rooms/{id}/checkout` — mark the room checked out (to cleaning).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn checkout_room(&self, room_id: i64) -> Result<Value, ApiError> {
        self.put_empty(&format!("/rooms/{room_id}/checkout")).await
    }

    /// `PUT /rooms/{id}/cleaning-complete` — return the room to available.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn cleaning_complete(&self, room_id: i64) -> Result<Value, ApiError> {
        self.put_empty(&format!("/rooms/{room_id}/cleaning-complete")).await
    }

    /// `PUT /rooms/{id}/maintenance` — take the room out of service.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn set_room_maintenance(&self, room_id: i64) -> Result<Value, ApiError> {
        self.put_empty(&format!("/rooms/{room_id}/maintenance")).await
    }

    // ── Amenities and serial numbers ───────────────────────────────────

    /// `GET /available-amenities`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn available_amenities(&self) -> Result<Value, ApiError> {
        self.get_json("/available-amenities").await
    }

    /// `GET /serial-types`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn serial_types(&self) -> Result<Value, ApiError> {
        self.get_json("/serial-types").await
    }

    /// `GET /serial-numbers`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn serial_numbers(&self) -> Result<Value, ApiError> {
        self.get_json("/serial-numbers").await
    }

    /// `GET /rooms/{id}/serial-numbers` — amenities assigned to a room.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn room_serial_numbers(&self, room_id: i64) -> Result<Value, ApiError> {
        self.get_json(&format!("/rooms/{room_id}/serial-numbers")).await
    }

    /// `PUT /rooms/{id}/serial-numbers` — payload: `{ serial_numbers: [...] }`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn update_room_serial_numbers(
        &self,
        room_id: i64,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.put_json(&format!("/rooms/{room_id}/serial-numbers"), payload).await
    }
}
