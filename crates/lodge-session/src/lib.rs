//! # lodge-session
//!
//! Persistent session store for the Lodge client.
//!
//! Holds the bearer token and user id issued at login — the Rust analogue of
//! the browser's `token`/`userId` storage keys. Both fields live in a single
//! record so they are always set and cleared together. Storage tiers: OS
//! keychain (`keyring`) with a file fallback under `~/.lodge/session.json`,
//! plus an env-var tier for CI.
//!
//! Session teardown is observable: [`SessionStore::subscribe`] yields
//! [`SessionEvent`]s so the application shell — not the HTTP layer — decides
//! how to react to a forced invalidation (e.g. return to the login view).

mod error;
mod events;
mod store;

pub use error::SessionError;
pub use events::SessionEvent;
pub use store::{Session, SessionStore};
