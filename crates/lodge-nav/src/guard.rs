//! The navigation guard.

use lodge_config::NavConfig;
use lodge_session::SessionStore;

use crate::resolver::{RoleResolution, RoleResolver};
use crate::route::{Route, RouteTable};

/// Outcome of a guard evaluation. The router commits the transition on
/// `Allow` and replaces it on `Redirect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
    Allow,
    Redirect {
        /// Path to navigate to instead.
        target: String,
    },
}

/// Evaluates every navigation attempt before the transition commits.
///
/// Attempts are serialized by the caller (one at a time); the guard itself
/// holds no mutable state. Shared state is limited to the session store,
/// which the HTTP layer may clear while a role fetch is in flight — the
/// guard re-checks session validity after that gap rather than trusting a
/// result obtained under a session that no longer exists.
pub struct NavigationGuard {
    session: SessionStore,
    resolver: RoleResolver,
    routes: RouteTable,
    login_path: String,
    access_denied_path: String,
}

impl NavigationGuard {
    #[must_use]
    pub fn new(
        config: &NavConfig,
        session: SessionStore,
        resolver: RoleResolver,
        routes: RouteTable,
    ) -> Self {
        Self {
            session,
            resolver,
            routes,
            login_path: config.login_path.clone(),
            access_denied_path: config.access_denied_path.clone(),
        }
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Evaluate a navigation attempt by destination path.
    ///
    /// Unknown paths carry no metadata and are allowed through — the router
    /// resolves them to its not-found view.
    pub async fn evaluate_path(&self, path: &str) -> GuardVerdict {
        match self.routes.find(path) {
            Some(route) => self.evaluate(route).await,
            None => {
                tracing::debug!(path, "no route metadata — allowing");
                GuardVerdict::Allow
            }
        }
    }

    /// Evaluate a navigation attempt against a route's metadata.
    ///
    /// Order: auth check, then role check. The role check runs whenever
    /// `required_roles` is non-empty, independent of `requires_auth` — an
    /// unauthenticated visitor on a role-gated route fails closed either
    /// way, to access-denied (empty role set) or login (fetch failure).
    pub async fn evaluate(&self, route: &Route) -> GuardVerdict {
        if route.requires_auth && !self.session.is_authenticated() {
            tracing::info!(path = %route.path, "unauthenticated — redirecting to login");
            return self.redirect(route, self.login_path.clone());
        }

        if route.required_roles.is_empty() {
            return GuardVerdict::Allow;
        }

        let resolution = self.resolver.resolve().await;

        // The session may have been torn down while the role fetch was in
        // flight (e.g. a concurrent 401). Do not trust a result obtained
        // under a session that no longer exists.
        if route.requires_auth && !self.session.is_authenticated() {
            tracing::info!(
                path = %route.path,
                "session invalidated during role resolution — redirecting to login"
            );
            return self.redirect(route, self.login_path.clone());
        }

        match resolution {
            RoleResolution::FetchFailed => {
                tracing::warn!(path = %route.path, "role fetch failed — failing closed to login");
                self.redirect(route, self.login_path.clone())
            }
            RoleResolution::Roles(roles) => {
                if roles.intersects(&route.required_roles) {
                    GuardVerdict::Allow
                } else {
                    tracing::info!(
                        path = %route.path,
                        required = ?route.required_roles,
                        "missing required role — redirecting to access denied"
                    );
                    self.redirect(route, self.access_denied_path.clone())
                }
            }
        }
    }

    /// Redirecting a route to itself would loop; treat it as allowed.
    fn redirect(&self, route: &Route, target: String) -> GuardVerdict {
        if route.path == target {
            GuardVerdict::Allow
        } else {
            GuardVerdict::Redirect { target }
        }
    }
}
