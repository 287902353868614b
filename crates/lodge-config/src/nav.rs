//! Navigation redirect targets.

use serde::{Deserialize, Serialize};

fn default_login_path() -> String {
    "/pages/auth/login".to_string()
}

fn default_access_denied_path() -> String {
    "/auth/access".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavConfig {
    /// Where the guard and the session-teardown path send unauthenticated
    /// visitors.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Where the guard sends authenticated visitors lacking a required role.
    #[serde(default = "default_access_denied_path")]
    pub access_denied_path: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            access_denied_path: default_access_denied_path(),
        }
    }
}
