//! Per-navigation role resolution.

use std::sync::Arc;

use lodge_api::ApiClient;
use lodge_core::RoleSet;

/// Outcome of a role resolution attempt.
///
/// `Roles` may be empty — no user id stored, or the account record carries
/// no role data. `FetchFailed` means the lookup itself errored; the guard
/// treats the two differently (access-denied vs fail-closed to login).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleResolution {
    Roles(RoleSet),
    FetchFailed,
}

/// Fetches the current user's role set from the backend.
///
/// Re-fetches on every call — roles are not cached across navigations, so
/// a role change on the server takes effect on the next attempt. Never
/// returns an error: failures are logged and collapsed into
/// [`RoleResolution::FetchFailed`].
pub struct RoleResolver {
    api: Arc<ApiClient>,
}

impl RoleResolver {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Resolve the stored user's roles.
    pub async fn resolve(&self) -> RoleResolution {
        let Some(user_id) = self.api.session().user_id() else {
            tracing::debug!("no stored user id — resolving to an empty role set");
            return RoleResolution::Roles(RoleSet::new());
        };

        match self.api.current_user(&user_id).await {
            Ok(identity) => RoleResolution::Roles(RoleSet::from_identity(&identity)),
            Err(error) => {
                tracing::warn!(%error, user_id, "role resolution failed");
                RoleResolution::FetchFailed
            }
        }
    }
}
