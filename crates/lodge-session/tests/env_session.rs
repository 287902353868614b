//! Env-tier session behavior.
//!
//! Lives in its own test binary: the tier reads process-global variables,
//! so these tests must not share a process with the rest of the suite.
//! `figment::Jail` scopes each variable set to one test.

use figment::Jail;
use lodge_session::{Session, SessionEvent, SessionStore};
use pretty_assertions::assert_eq;

const TOKEN_ENV: &str = "LODGE_SESSION__TOKEN";
const USER_ID_ENV: &str = "LODGE_SESSION__USER_ID";

#[test]
fn env_pair_is_loaded_when_both_present() {
    Jail::expect_with(|jail| {
        jail.set_env(TOKEN_ENV, "tok_env");
        jail.set_env(USER_ID_ENV, "42");

        let store = SessionStore::file_backed(jail.directory());
        assert_eq!(store.load(), Some(Session::new("tok_env", "42")));
        assert_eq!(store.detect_source().as_deref(), Some("env"));
        Ok(())
    });
}

#[test]
fn env_tier_requires_both_keys() {
    Jail::expect_with(|jail| {
        jail.set_env(TOKEN_ENV, "tok_env");

        let store = SessionStore::file_backed(jail.directory());
        assert!(store.load().is_none());
        assert!(store.detect_source().is_none());
        Ok(())
    });
}

#[test]
fn invalidation_destroys_an_env_session() {
    // A 401/403 teardown must leave no loadable credentials behind, even
    // when they were injected through the environment.
    Jail::expect_with(|jail| {
        jail.set_env(TOKEN_ENV, "tok_env");
        jail.set_env(USER_ID_ENV, "42");

        let store = SessionStore::file_backed(jail.directory());
        assert!(store.is_authenticated());

        let mut rx = store.subscribe();
        store.invalidate(401);

        assert!(store.load().is_none(), "env session outlived invalidation");
        assert!(!store.is_authenticated());
        assert!(store.detect_source().is_none());
        assert_eq!(
            rx.try_recv().expect("event"),
            SessionEvent::Invalidated { status: 401 }
        );
        Ok(())
    });
}

#[test]
fn logout_destroys_an_env_session() {
    Jail::expect_with(|jail| {
        jail.set_env(TOKEN_ENV, "tok_env");
        jail.set_env(USER_ID_ENV, "42");

        let store = SessionStore::file_backed(jail.directory());
        store.logout();

        assert!(store.load().is_none());
        assert!(!store.is_authenticated());
        Ok(())
    });
}

#[test]
fn clear_masks_the_env_tier_across_clones() {
    Jail::expect_with(|jail| {
        jail.set_env(TOKEN_ENV, "tok_env");
        jail.set_env(USER_ID_ENV, "42");

        let store = SessionStore::file_backed(jail.directory());
        let clone = store.clone();
        clone.invalidate(403);

        assert!(store.load().is_none(), "mask must be shared state");
        Ok(())
    });
}

#[test]
fn fresh_login_lifts_the_mask() {
    Jail::expect_with(|jail| {
        jail.set_env(TOKEN_ENV, "tok_env");
        jail.set_env(USER_ID_ENV, "42");

        let store = SessionStore::file_backed(jail.directory());
        store.clear().expect("clear");
        assert!(store.load().is_none());

        // A new login re-enables every tier; env outranks the file, so the
        // injected pair is visible again.
        store.store(&Session::new("tok_fresh", "7")).expect("store");
        assert_eq!(store.load(), Some(Session::new("tok_env", "42")));
        Ok(())
    });
}
