//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use nb_config::{ConfigError, Environment, NodebucketConfig};
use pretty_assertions::assert_eq;

fn from_file(name: &str) -> Figment {
    Figment::from(Serialized::defaults(NodebucketConfig::default())).merge(Toml::file(name))
}

#[test]
fn loads_server_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
host = "127.0.0.1"
port = 8080
environment = "production"
static_dir = "./dist"
"#,
        )?;

        let config: NodebucketConfig = from_file("config.toml").extract()?;

        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.server.environment, Environment::Production);
        assert_eq!(config.server.static_dir.as_deref(), Some("./dist"));
        Ok(())
    });
}

#[test]
fn loads_database_and_client_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
url = "libsql://nodebucket.turso.io"
auth_token = "token"

[client]
base_url = "https://nodebucket.example.com"
banner_timeout_ms = 2500
"#,
        )?;

        let config: NodebucketConfig = from_file("config.toml").extract()?;

        assert!(config.database.is_remote());
        assert_eq!(config.database.path, "nodebucket.db");
        assert_eq!(config.client.base_url, "https://nodebucket.example.com");
        assert_eq!(config.client.banner_timeout_ms, 2500);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[server]\nport = 4200\n")?;

        let config: NodebucketConfig = from_file("config.toml").extract()?;

        assert_eq!(config.server.port, 4200);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.client.base_url, "http://localhost:3000");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[server]\nport = 4200\n")?;
        jail.set_env("NODEBUCKET_SERVER__PORT", "9090");

        let config: NodebucketConfig = from_file("config.toml")
            .merge(Env::prefixed("NODEBUCKET_").split("__"))
            .extract()?;

        assert_eq!(config.server.port, 9090);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".nodebucket")?;
        jail.create_file(
            ".nodebucket/config.toml",
            "[database]\npath = \"project.db\"\n",
        )?;

        let config = NodebucketConfig::load().expect("config loads");
        assert_eq!(config.database.path, "project.db");
        Ok(())
    });
}

#[test]
fn invalid_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[client]\nbase_url = \"localhost\"\n")?;

        let err = NodebucketConfig::from_figment(&from_file("config.toml"))
            .expect_err("non-http base url must be rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "client.base_url"
        ));
        Ok(())
    });
}

#[test]
fn malformed_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[server]\nport = \"not-a-port\"\n")?;

        let err = NodebucketConfig::from_figment(&from_file("config.toml"))
            .expect_err("string port must not parse");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
