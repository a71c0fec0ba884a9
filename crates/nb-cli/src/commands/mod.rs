pub mod dispatch;
pub mod schema;
pub mod seed;
pub mod serve;
pub mod session;
pub mod tasks;

use nb_client::ClientError;

/// Turn a client failure into the message a user should see.
pub(crate) fn surface(error: ClientError) -> anyhow::Error {
    tracing::debug!(error = %error, "client call failed");
    anyhow::anyhow!(error.user_message())
}
