//! Cross-cutting error types for Nodebucket.
//!
//! Domain-specific errors (`DatabaseError`, `SchemaError`, `ApiError`,
//! `ClientError`) live in their respective crates.

use thiserror::Error;

/// Errors that can be raised by any Nodebucket crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The OS random source could not produce an identifier.
    #[error("ID generation failed: {0}")]
    IdGeneration(String),
}
