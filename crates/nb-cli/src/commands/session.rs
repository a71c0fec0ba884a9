use anyhow::Context;

use nb_client::{SessionStore, SignIn, TaskClient};
use nb_config::NodebucketConfig;

use crate::cli::GlobalFlags;
use crate::cli::commands::SigninArgs;
use crate::commands::surface;
use crate::output::{notice, output};

pub(crate) fn session_store(config: &NodebucketConfig) -> SessionStore {
    SessionStore::new(config.client.session_path())
}

/// Handle `nbk signin <empId>`.
pub async fn signin(
    args: &SigninArgs,
    config: &NodebucketConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = TaskClient::new(&config.client.base_url).map_err(surface)?;
    let user = SignIn::new(client)
        .submit(&args.emp_id)
        .await
        .map_err(surface)?;

    session_store(config)
        .save(&user)
        .context("failed to save session")?;
    notice(&format!("Signed in as {}", user.display_name), flags);
    output(&user, flags.format)
}

/// Handle `nbk signout`.
pub fn signout(config: &NodebucketConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    session_store(config)
        .clear()
        .context("failed to remove session")?;
    notice("Signed out", flags);
    Ok(())
}
