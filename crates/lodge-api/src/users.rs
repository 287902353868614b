//! Account administration and the current-user lookup.
//!
//! `current_user` is the one endpoint in this module with a typed response:
//! the navigation guard's role resolver depends on its `role` /
//! `additional_roles` fields.

use serde_json::Value;

use lodge_core::UserIdentity;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /users`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn users(&self) -> Result<Value, ApiError> {
        self.get_json("/users").await
    }

    /// `POST /users/add`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn add_user(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/users/add", payload).await
    }

    /// `PUT /users/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn update_user(&self, user_id: i64, payload: &Value) -> Result<Value, ApiError> {
        self.put_json(&format!("/users/{user_id}"), payload).await
    }

    /// `DELETE /users/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn delete_user(&self, user_id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/users/{user_id}")).await
    }

    /// `POST /users/{id}/reset-password` — payload:
    /// `{ current_password, new_password }`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn reset_user_password(
        &self,
        user_id: i64,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.post_json(&format!("/users/{user_id}/reset-password"), payload).await
    }

    /// `POST /users/{id}/admin-reset-password` — payload: `{ new_password }`.
    /// No current password required; caller must hold an admin role.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn admin_reset_user_password(
        &self,
        user_id: i64,
        payload: &Value,
    ) -> Result<Value, ApiError> {
        self.post_json(&format!("/users/{user_id}/admin-reset-password"), payload)
            .await
    }

    /// `POST /users/{id}/upload-image` — multipart avatar upload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn upload_user_image(
        &self,
        user_id: i64,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        self.post_multipart(&format!("/users/{user_id}/upload-image"), form).await
    }

    /// `POST /users/{id}/update-profile` — multipart: profile fields plus
    /// optional image.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn update_user_profile(
        &self,
        user_id: i64,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        self.post_multipart(&format!("/users/{user_id}/update-profile"), form).await
    }

    /// `GET /users/{id}/logs` — activity log for an account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn user_logs(&self, user_id: i64) -> Result<Value, ApiError> {
        self.get_json(&format!("/users/{user_id}/logs")).await
    }

    /// `GET /user/{id}` — the account record for a stored user id.
    ///
    /// Takes the id as a string because that is how the session store holds
    /// it; the backend echoes it back numeric.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status, or a
    /// response body that does not match [`UserIdentity`].
    pub async fn current_user(&self, user_id: &str) -> Result<UserIdentity, ApiError> {
        self.get_json(&format!("/user/{user_id}")).await
    }
}
