//! Session storage configuration.

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "lodge-client".to_string()
}

const fn default_use_keyring() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Keyring service name. Override for testing (e.g. `"lodge-client-test"`)
    /// to avoid touching production credentials.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Whether to use the OS keychain at all. When `false`, only the
    /// credentials file is used (CI and headless environments).
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,

    /// Directory for the session credentials file. Empty means `~/.lodge`.
    #[serde(default)]
    pub credentials_dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
            use_keyring: default_use_keyring(),
            credentials_dir: String::new(),
        }
    }
}
