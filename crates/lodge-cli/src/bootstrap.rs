use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use lodge_api::ApiClient;
use lodge_config::{LodgeConfig, SessionConfig};
use lodge_nav::{NavigationGuard, RoleResolver, RouteTable};
use lodge_session::SessionStore;

/// Everything a command handler needs: config, the shared session store,
/// and the configured API client.
pub struct AppContext {
    pub config: LodgeConfig,
    pub session: SessionStore,
    pub api: Arc<ApiClient>,
}

impl AppContext {
    /// Load config (`.env` included), build the session store, and wire the
    /// API client to it.
    ///
    /// # Errors
    ///
    /// Fails if configuration cannot be loaded or no credentials directory
    /// can be resolved.
    pub fn init() -> anyhow::Result<Self> {
        let config = LodgeConfig::load_with_dotenv().context("failed to load configuration")?;
        let session = build_session_store(&config.session)?;
        let api = Arc::new(ApiClient::new(&config.api, session.clone()));
        Ok(Self {
            config,
            session,
            api,
        })
    }

    /// A navigation guard over the default route table, sharing this
    /// context's session and API client.
    #[must_use]
    pub fn guard(&self) -> NavigationGuard {
        NavigationGuard::new(
            &self.config.nav,
            self.session.clone(),
            RoleResolver::new(Arc::clone(&self.api)),
            RouteTable::hotel_default(),
        )
    }
}

fn build_session_store(config: &SessionConfig) -> anyhow::Result<SessionStore> {
    let dir_override =
        (!config.credentials_dir.is_empty()).then(|| Path::new(&config.credentials_dir));

    if config.use_keyring {
        SessionStore::new(&config.keyring_service, dir_override)
            .context("failed to initialize session store")
    } else {
        let dir = dir_override
            .map(Path::to_path_buf)
            .or_else(|| dirs::home_dir().map(|h| h.join(".lodge")))
            .context("home directory not found — set LODGE_SESSION__CREDENTIALS_DIR")?;
        Ok(SessionStore::file_backed(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backed_store_honors_credentials_dir() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let config = SessionConfig {
            use_keyring: false,
            credentials_dir: tmp.path().display().to_string(),
            ..SessionConfig::default()
        };

        let store = build_session_store(&config).expect("store");
        store
            .store(&lodge_session::Session::new("tok", "42"))
            .expect("store session");
        assert!(tmp.path().join("session.json").exists());
    }
}
