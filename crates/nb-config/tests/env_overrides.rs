use figment::Jail;
use nb_config::{Environment, NodebucketConfig};

#[test]
fn env_sets_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("NODEBUCKET_SERVER__ENVIRONMENT", "production");
        jail.set_env("NODEBUCKET_DATABASE__PATH", "/var/lib/nodebucket/data.db");
        jail.set_env("NODEBUCKET_CLIENT__BASE_URL", "http://10.0.0.5:3000");

        let config = NodebucketConfig::load().expect("config loads");
        assert_eq!(config.server.environment, Environment::Production);
        assert_eq!(config.database.path, "/var/lib/nodebucket/data.db");
        assert_eq!(config.client.base_url, "http://10.0.0.5:3000");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".nodebucket")?;
        jail.create_file(".nodebucket/config.toml", "[server]\nport = 4200\n")?;
        jail.set_env("NODEBUCKET_SERVER__PORT", "5000");

        let config = NodebucketConfig::load().expect("config loads");
        assert_eq!(config.server.port, 5000);
        Ok(())
    });
}

#[test]
fn log_filter_variable_does_not_break_loading() {
    Jail::expect_with(|jail| {
        jail.set_env("NODEBUCKET_LOG", "debug");

        let config = NodebucketConfig::load().expect("unknown top-level keys are ignored");
        assert_eq!(config.server.port, 3000);
        Ok(())
    });
}
