//! Document store (libSQL) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_path() -> String {
    "nodebucket.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote libSQL server URL (e.g., `libsql://nodebucket.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote server.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Remote mode is used when both the URL and token are set.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_remote() && self.path.trim().is_empty() {
            return Err(ConfigError::invalid(
                "database.path",
                "must be set when no remote url/auth_token is configured",
            ));
        }
        Ok(())
    }
}
