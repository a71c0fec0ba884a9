use nb_config::NodebucketConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: NodebucketConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        Commands::Seed(args) => commands::seed::handle(&args, &config, flags).await,
        Commands::Signin(args) => commands::session::signin(&args, &config, flags).await,
        Commands::Signout => commands::session::signout(&config, flags),
        Commands::Tasks { action } => commands::tasks::handle(&action, &config, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
