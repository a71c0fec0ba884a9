//! Task ID generation.
//!
//! Task IDs are 12 random bytes rendered as 24 lowercase hex characters,
//! the same width as a document-store object ID.

use crate::errors::CoreError;

/// Number of random bytes behind a task ID.
pub const TASK_ID_BYTES: usize = 12;

/// Length of a rendered task ID.
pub const TASK_ID_LEN: usize = TASK_ID_BYTES * 2;

/// Mint a fresh task ID from the OS random source.
///
/// # Errors
///
/// Returns `CoreError::IdGeneration` if the random source is unavailable.
pub fn generate_task_id() -> Result<String, CoreError> {
    let mut bytes = [0u8; TASK_ID_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(e.to_string()))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// Whether `s` has the shape of a server-minted task ID.
#[must_use]
pub fn is_task_id(s: &str) -> bool {
    s.len() == TASK_ID_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
