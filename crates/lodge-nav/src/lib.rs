//! # lodge-nav
//!
//! Navigation authorization for the Lodge client.
//!
//! Route definitions carry static authorization metadata (`requires_auth`,
//! `required_roles`); the [`NavigationGuard`] evaluates every navigation
//! attempt against the current session, fetching the user's roles through
//! the [`RoleResolver`] only when the destination demands them.
//!
//! Decisions are fail-closed: a role fetch that errors redirects to login,
//! a role set that simply doesn't match redirects to the access-denied
//! view, and the two are deliberately distinct outcomes.

mod guard;
mod resolver;
mod route;

pub use guard::{GuardVerdict, NavigationGuard};
pub use resolver::{RoleResolution, RoleResolver};
pub use route::{Route, RouteTable};
