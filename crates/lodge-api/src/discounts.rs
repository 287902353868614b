//! Discount endpoints.

use serde_json::Value;

use crate::{ApiClient, ApiError};

/// Query filters for [`ApiClient::discounts`].
#[derive(Debug, Clone, Default)]
pub struct DiscountQuery {
    /// Name search term.
    pub q: Option<String>,
    /// Filter by active flag (`0` or `1`).
    pub active: Option<u8>,
}

impl DiscountQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(active) = self.active {
            pairs.push(("active", active.to_string()));
        }
        pairs
    }
}

impl ApiClient {
    /// `GET /discounts` with optional `q` / `active` filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn discounts(&self, query: &DiscountQuery) -> Result<Value, ApiError> {
        self.get_with_query("/discounts", &query.to_pairs()).await
    }

    /// `POST /discounts` — payload:
    /// `{ name, percent, active?, starts_at?, ends_at? }`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn add_discount(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/discounts", payload).await
    }

    /// `PUT /discounts/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn update_discount(&self, id: i64, payload: &Value) -> Result<Value, ApiError> {
        self.put_json(&format!("/discounts/{id}"), payload).await
    }

    /// `DELETE /discounts/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn delete_discount(&self, id: i64) -> Result<Value, ApiError> {
        self.delete_json(&format!("/discounts/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn query_pairs_skip_absent_filters() {
        assert!(DiscountQuery::default().to_pairs().is_empty());

        let query = DiscountQuery {
            q: Some("summer".into()),
            active: Some(1),
        };
        assert_eq!(
            query.to_pairs(),
            vec![("q", "summer".to_string()), ("active", "1".to_string())]
        );
    }
}
