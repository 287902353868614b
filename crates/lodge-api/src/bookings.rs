//! Booking endpoints.
//!
//! Two surfaces share this module: the staff desk operations (raw
//! [`ApiError`] pass-through for the views to interpret) and the
//! guest-facing subset, which rewraps failures into caller-friendly
//! messages via [`ApiError::friendly`] the way the public booking pages
//! expect.

use serde_json::Value;

use crate::{ApiClient, ApiError};

impl ApiClient {
    // ── Staff desk ─────────────────────────────────────────────────────

    /// `POST /bookings` — payload: guest, room, dates, payment fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn book_room(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/bookings", payload).await
    }

    /// `GET /bookings/room/{id}/latest`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn latest_booking(&self, room_id: i64) -> Result<Value, ApiError> {
        self.get_json(&format!("/bookings/room/{room_id}/latest")).await
    }

    /// `DELETE /bookings/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn cancel_booking(&self, booking_id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/bookings/{booking_id}")).await
    }

    /// `PUT /bookings/{id}/checkin`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn check_in_booking(
        &self,
        booking_id: i64,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.put_json(&format!("/bookings/{booking_id}/checkin"), payload).await
    }

    /// `GET /bookings/cancelled`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn cancelled_bookings(&self) -> Result<Value, ApiError> {
        self.get_json("/bookings/cancelled").await
    }

    /// `DELETE /bookings/cancelled/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn delete_cancelled_booking(&self, booking_id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/bookings/cancelled/{booking_id}")).await
    }

    // ── Guest-facing subset (friendly errors) ──────────────────────────

    /// `GET /available-rooms`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Friendly`] with the backend's message or
    /// "Failed to fetch available rooms".
    pub async fn available_rooms(&self) -> Result<Value, ApiError> {
        self.get_json("/available-rooms")
            .await
            .map_err(|e| e.friendly("Failed to fetch available rooms"))
    }

    /// `GET /room-details/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Friendly`] with the backend's message or
    /// "Failed to fetch room details".
    pub async fn room_details(&self, room_id: i64) -> Result<Value, ApiError> {
        self.get_json(&format!("/room-details/{room_id}"))
            .await
            .map_err(|e| e.friendly("Failed to fetch room details"))
    }

    /// `GET /user-bookings` — bookings for the authenticated guest.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Friendly`] with the backend's message or
    /// "Failed to fetch user bookings".
    pub async fn user_bookings(&self) -> Result<Value, ApiError> {
        self.get_json("/user-bookings")
            .await
            .map_err(|e| e.friendly("Failed to fetch user bookings"))
    }

    /// `POST /create-booking`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Friendly`] with the backend's message or
    /// "Failed to create booking".
    pub async fn create_booking(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/create-booking", payload)
            .await
            .map_err(|e| e.friendly("Failed to create booking"))
    }

    /// `PUT /cancel-booking/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Friendly`] with the backend's message or
    /// "Failed to cancel booking".
    pub async fn cancel_guest_booking(&self, booking_id: i64) -> Result<Value, ApiError> {
        self.put_empty(&format!("/cancel-booking/{booking_id}"))
            .await
            .map_err(|e| e.friendly("Failed to cancel booking"))
    }

    /// `POST /check-expired-bookings` — sweep unconfirmed bookings past
    /// their hold window.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Friendly`] with the backend's message or
    /// "Failed to check expired bookings".
    pub async fn check_expired_bookings(&self) -> Result<Value, ApiError> {
        self.post_empty("/check-expired-bookings")
            .await
            .map_err(|e| e.friendly("Failed to check expired bookings"))
    }

    /// `GET /guest-bookings` — bookings created through the public site.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Friendly`] with the backend's message or
    /// "Failed to fetch guest bookings".
    pub async fn guest_bookings(&self) -> Result<Value, ApiError> {
        self.get_json("/guest-bookings")
            .await
            .map_err(|e| e.friendly("Failed to fetch guest bookings"))
    }
}
