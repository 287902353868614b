use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::error::SessionError;
use crate::events::SessionEvent;

const KEYRING_USER: &str = "session";
const SESSION_FILE_NAME: &str = "session.json";
const TOKEN_ENV: &str = "LODGE_SESSION__TOKEN";
const USER_ID_ENV: &str = "LODGE_SESSION__USER_ID";
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// The stored credential pair. Token and user id are one record: they are
/// written and destroyed together, never individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by `/login`.
    pub token: String,
    /// Id of the logged-in account, used by the role resolver.
    pub user_id: String,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
        }
    }

    /// A session with either field empty is treated as absent.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.token.is_empty() && !self.user_id.is_empty()
    }
}

struct Inner {
    /// `None` disables the keychain tier entirely (file-only mode).
    keyring_service: Option<String>,
    session_path: PathBuf,
    events: broadcast::Sender<SessionEvent>,
    /// The env pair cannot be deleted from the process, so `clear` masks
    /// that tier instead; a successful `store` lifts the mask.
    env_masked: AtomicBool,
}

/// Explicitly constructed session store, shared by cloning.
///
/// One store instance is created at app start and handed to both the HTTP
/// client (token injection, 401/403 teardown) and the navigation guard
/// (auth checks). There is no global singleton; all mutation goes through
/// `store`, `clear`, `invalidate`, and `logout`.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Create a store using the OS keychain with a file fallback.
    ///
    /// `credentials_dir` overrides the default `~/.lodge` location.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StoreError` if no credentials directory can be
    /// resolved.
    pub fn new(
        keyring_service: &str,
        credentials_dir: Option<&Path>,
    ) -> Result<Self, SessionError> {
        let dir = match credentials_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::home_dir().map(|h| h.join(".lodge")).ok_or_else(|| {
                SessionError::StoreError(
                    "home directory not found — cannot store session".into(),
                )
            })?,
        };
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            inner: Arc::new(Inner {
                keyring_service: Some(keyring_service.to_string()),
                session_path: dir.join(SESSION_FILE_NAME),
                events,
                env_masked: AtomicBool::new(false),
            }),
        })
    }

    /// Create a store that only uses the credentials file.
    ///
    /// For CI, headless environments, and tests.
    #[must_use]
    pub fn file_backed(credentials_dir: impl Into<PathBuf>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                keyring_service: None,
                session_path: credentials_dir.into().join(SESSION_FILE_NAME),
                events,
                env_masked: AtomicBool::new(false),
            }),
        }
    }

    /// Persist a session. Keychain first, file fallback.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StoreError` if the session is invalid (either
    /// field empty) or both storage tiers fail.
    pub fn store(&self, session: &Session) -> Result<(), SessionError> {
        if !session.is_valid() {
            return Err(SessionError::StoreError(
                "refusing to store a session with an empty token or user id".into(),
            ));
        }
        let json = serde_json::to_string(session)
            .map_err(|e| SessionError::StoreError(format!("serialize session: {e}")))?;

        if let Some(service) = &self.inner.keyring_service {
            match keyring::Entry::new(service, KEYRING_USER) {
                Ok(entry) => match entry.set_password(&json) {
                    Ok(()) => {
                        self.inner.env_masked.store(false, Ordering::Relaxed);
                        return Ok(());
                    }
                    Err(error) => {
                        tracing::warn!(%error, "keyring store failed; falling back to file");
                    }
                },
                Err(error) => {
                    tracing::warn!(%error, "keyring unavailable; falling back to file");
                }
            }
        }
        self.store_file(&json)?;
        self.inner.env_masked.store(false, Ordering::Relaxed);
        Ok(())
    }

    /// Load the session. Priority: keyring → env pair → file.
    ///
    /// Records failing the set-together invariant (empty token or user id)
    /// are treated as absent, and the env tier is ignored while masked by
    /// [`SessionStore::clear`].
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        if let Some(service) = &self.inner.keyring_service
            && let Ok(entry) = keyring::Entry::new(service, KEYRING_USER)
            && let Ok(json) = entry.get_password()
            && let Ok(session) = serde_json::from_str::<Session>(&json)
            && session.is_valid()
        {
            return Some(session);
        }

        // Env tier: both variables must be present and non-empty. Skipped
        // entirely once `clear` has masked it, so a torn-down session does
        // not resurrect itself from the environment.
        if !self.inner.env_masked.load(Ordering::Relaxed)
            && let (Ok(token), Ok(user_id)) =
                (std::env::var(TOKEN_ENV), std::env::var(USER_ID_ENV))
        {
            let session = Session::new(token, user_id);
            if session.is_valid() {
                return Some(session);
            }
        }

        self.load_file()
    }

    /// Remove the stored session from every tier.
    ///
    /// The env pair is process state that cannot be unset from here, so it
    /// is masked instead: `load` and `detect_source` ignore it until the
    /// next successful `store`. Idempotent: clearing an absent session is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StoreError` if the session file exists but
    /// cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.inner.env_masked.store(true, Ordering::Relaxed);

        if let Some(service) = &self.inner.keyring_service
            && let Ok(entry) = keyring::Entry::new(service, KEYRING_USER)
        {
            // May not exist — ignore.
            let _ = entry.delete_credential();
        }

        let path = &self.inner.session_path;
        if path.exists() {
            fs::remove_file(path).map_err(|e| {
                SessionError::StoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    /// Token and user id are both present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.load().is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.load().map(|s| s.user_id)
    }

    /// Subscribe to session lifecycle events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// Reactive teardown: clear the session and notify subscribers.
    ///
    /// Called by the HTTP response middleware on 401/403. Clear failures are
    /// logged, not raised — the caller is already on an error path.
    pub fn invalidate(&self, status: u16) {
        if let Err(error) = self.clear() {
            tracing::warn!(%error, status, "failed to clear session during invalidation");
        }
        // No receivers is fine — nothing is listening yet.
        let _ = self.inner.events.send(SessionEvent::Invalidated { status });
    }

    /// Explicit logout: clear the session and notify subscribers.
    pub fn logout(&self) {
        if let Err(error) = self.clear() {
            tracing::warn!(%error, "failed to clear session during logout");
        }
        let _ = self.inner.events.send(SessionEvent::LoggedOut);
    }

    /// Detect which tier the current session came from (for status display).
    #[must_use]
    pub fn detect_source(&self) -> Option<String> {
        if let Some(service) = &self.inner.keyring_service
            && let Ok(entry) = keyring::Entry::new(service, KEYRING_USER)
            && entry.get_password().is_ok_and(|json| {
                serde_json::from_str::<Session>(&json).is_ok_and(|s| s.is_valid())
            })
        {
            return Some("keyring".into());
        }
        if !self.inner.env_masked.load(Ordering::Relaxed)
            && std::env::var(TOKEN_ENV).is_ok_and(|t| !t.is_empty())
            && std::env::var(USER_ID_ENV).is_ok_and(|u| !u.is_empty())
        {
            return Some("env".into());
        }
        if self.load_file().is_some() {
            return Some("file".into());
        }
        None
    }

    // --- Private file helpers ---

    fn store_file(&self, json: &str) -> Result<(), SessionError> {
        let path = &self.inner.session_path;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SessionError::StoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(path, json).map_err(|e| {
            SessionError::StoreError(format!("write {}: {e}", path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                SessionError::StoreError(format!("chmod {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }

    fn load_file(&self) -> Option<Session> {
        let content = fs::read_to_string(&self.inner.session_path)
            .ok()
            .filter(|s| !s.trim().is_empty())?;
        serde_json::from_str::<Session>(&content)
            .ok()
            .filter(Session::is_valid)
    }
}
