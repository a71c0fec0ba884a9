//! Client-side configuration: where the API lives and where the signed-in
//! employee is remembered.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

const fn default_banner_timeout_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Server origin; the client appends `/api/employees/...`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Session file override. Empty means the user config dir default.
    #[serde(default)]
    pub session_file: String,

    /// How long status banners stay up before being cleared.
    #[serde(default = "default_banner_timeout_ms")]
    pub banner_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_file: String::new(),
            banner_timeout_ms: default_banner_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Resolved session file path.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        if !self.session_file.is_empty() {
            return PathBuf::from(&self.session_file);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nodebucket")
            .join("session.toml")
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "client.base_url",
                format!("'{}' is not an http(s) URL", self.base_url),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.banner_timeout_ms, 5000);
        assert!(config.session_path().ends_with("nodebucket/session.toml"));
    }

    #[test]
    fn explicit_session_file_wins() {
        let config = ClientConfig {
            session_file: "/tmp/nb-session.toml".into(),
            ..Default::default()
        };
        assert_eq!(config.session_path(), PathBuf::from("/tmp/nb-session.toml"));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let config = ClientConfig {
            base_url: "ftp://example.com".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
