//! Shared HTTP response helpers.

use nb_core::responses::ErrorEnvelope;

use crate::error::ClientError;

/// Check an HTTP response, turning non-success statuses into
/// [`ClientError::Api`].
///
/// The message is taken from the server's error envelope when the body is
/// one; otherwise it is left empty so callers fall back to generic text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: envelope_message(&body).unwrap_or_default(),
    })
}

fn envelope_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.message)
        .filter(|message| !message.is_empty())
}
