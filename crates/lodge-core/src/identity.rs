use serde::{Deserialize, Serialize};

/// Account record as returned by the backend's `/user/{id}` endpoint.
///
/// Produced by `lodge-api`, consumed by the role resolver in `lodge-nav`.
/// Role fields are optional — older backend records may carry neither, and
/// the resolver treats a missing role as "no roles".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Numeric account id.
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Primary role label (e.g. `"Manager"`, `"System Admin"`).
    #[serde(default)]
    pub role: Option<String>,
    /// Secondary role labels granted on top of the primary role.
    #[serde(default)]
    pub additional_roles: Vec<String>,
    /// Profile image URL, if one was uploaded.
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "id": 42,
            "name": "Dana Reyes",
            "email": "dana@hotel.test",
            "role": "Manager",
            "additional_roles": ["Inventory"],
            "image_url": "/uploads/users/42.png"
        }"#;

        let identity: UserIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.id, 42);
        assert_eq!(identity.role.as_deref(), Some("Manager"));
        assert_eq!(identity.additional_roles, vec!["Inventory".to_string()]);
    }

    #[test]
    fn deserializes_record_without_role_data() {
        let json = r#"{"id": 7, "name": "Guest", "email": "guest@hotel.test"}"#;
        let identity: UserIdentity = serde_json::from_str(json).unwrap();
        assert!(identity.role.is_none());
        assert!(identity.additional_roles.is_empty());
        assert!(identity.image_url.is_none());
    }
}
