use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::identity::UserIdentity;

/// A user's role labels: the primary role plus any additional roles.
///
/// Used only for membership testing against a route's required roles —
/// never ordered or weighted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(HashSet<String>);

impl RoleSet {
    /// Empty role set — the fail-closed default.
    #[must_use]
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    /// Union of the identity's primary role and additional roles.
    ///
    /// A missing primary role contributes nothing; an identity with neither
    /// field yields an empty set.
    #[must_use]
    pub fn from_identity(identity: &UserIdentity) -> Self {
        let mut roles = HashSet::new();
        if let Some(role) = &identity.role
            && !role.is_empty()
        {
            roles.insert(role.clone());
        }
        roles.extend(
            identity
                .additional_roles
                .iter()
                .filter(|r| !r.is_empty())
                .cloned(),
        );
        Self(roles)
    }

    #[must_use]
    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    /// Whether any of `required` is held. Empty `required` never matches.
    #[must_use]
    pub fn intersects(&self, required: &[String]) -> bool {
        required.iter().any(|role| self.0.contains(role))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for RoleSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for RoleSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Option<&str>, additional: &[&str]) -> UserIdentity {
        UserIdentity {
            id: 42,
            name: "Dana Reyes".into(),
            email: "dana@hotel.test".into(),
            role: role.map(String::from),
            additional_roles: additional.iter().map(|r| (*r).to_string()).collect(),
            image_url: None,
        }
    }

    #[test]
    fn from_identity_unions_primary_and_additional() {
        let roles = RoleSet::from_identity(&identity(Some("Manager"), &["Inventory"]));
        assert_eq!(roles.len(), 2);
        assert!(roles.contains("Manager"));
        assert!(roles.contains("Inventory"));
    }

    #[test]
    fn from_identity_without_role_data_is_empty() {
        let roles = RoleSet::from_identity(&identity(None, &[]));
        assert!(roles.is_empty());
    }

    #[test]
    fn from_identity_skips_empty_labels() {
        let roles = RoleSet::from_identity(&identity(Some(""), &["", "Front Desk"]));
        assert_eq!(roles.len(), 1);
        assert!(roles.contains("Front Desk"));
    }

    #[test]
    fn intersects_on_shared_label() {
        let roles: RoleSet = ["Manager", "Inventory"].into_iter().collect();
        let required = vec!["Inventory".to_string(), "System Admin".to_string()];
        assert!(roles.intersects(&required));
    }

    #[test]
    fn intersects_false_when_disjoint() {
        let roles: RoleSet = ["Front Desk"].into_iter().collect();
        let required = vec!["System Admin".to_string()];
        assert!(!roles.intersects(&required));
    }

    #[test]
    fn empty_required_never_matches() {
        let roles: RoleSet = ["Manager"].into_iter().collect();
        assert!(!roles.intersects(&[]));
    }
}
