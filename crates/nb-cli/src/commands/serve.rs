use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use nb_api::AppState;
use nb_config::NodebucketConfig;
use nb_db::{LibsqlEmployeeStore, NbDb};

use crate::cli::commands::ServeArgs;

/// Handle `nbk serve`.
pub async fn handle(args: &ServeArgs, mut config: NodebucketConfig) -> anyhow::Result<()> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.static_dir.is_some() {
        config.server.static_dir.clone_from(&args.static_dir);
    }
    config.validate().context("invalid server overrides")?;

    let db = NbDb::open(&config.database)
        .await
        .context("failed to open employee store")?;
    info!(location = db.location(), "employee store ready");

    let store = Arc::new(LibsqlEmployeeStore::new(db));
    let state = AppState::new(store, config.server.environment);
    nb_api::serve(&config.server, state)
        .await
        .with_context(|| format!("server on {} failed", config.server.bind_address()))
}
