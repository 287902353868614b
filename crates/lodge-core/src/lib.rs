//! # lodge-core
//!
//! Shared types for the Lodge client crates:
//! - [`identity::UserIdentity`] — the account record returned by `/user/{id}`
//! - [`roles::RoleSet`] — a user's role labels, used for membership testing
//!   against route requirements
//!
//! No I/O, no auth logic — pure data types passed between `lodge-session`,
//! `lodge-api`, and `lodge-nav`.

pub mod identity;
pub mod roles;

pub use identity::UserIdentity;
pub use roles::RoleSet;
