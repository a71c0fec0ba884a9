//! Client error types.

use thiserror::Error;

/// Shown when a failure carries no server-provided message.
pub const GENERIC_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Bounds on task text enforced before a create request is sent.
pub const TASK_TEXT_MIN: usize = 3;
pub const TASK_TEXT_MAX: usize = 50;

/// Shown when a typed employee id is not a number.
pub const INVALID_EMPLOYEE_ID: &str = "The employee ID is invalid. Please enter a number.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("The employee ID is invalid. Please enter a number.")]
    InvalidEmployeeId(String),

    /// Task text outside the accepted length, counted in characters.
    #[error("Task text must be between 3 and 50 characters.")]
    InvalidTaskText { length: usize },

    #[error("You must be signed in to access this page.")]
    NotSignedIn,

    /// The session file could not be read or written.
    #[error("session error: {0}")]
    Session(String),
}

impl ClientError {
    /// Text for the error banner: the server's message when there is one,
    /// otherwise a generic string.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            Self::InvalidEmployeeId(_) | Self::InvalidTaskText { .. } | Self::NotSignedIn => {
                self.to_string()
            }
            _ => GENERIC_ERROR.to_string(),
        }
    }

    /// HTTP status of an API error, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_message_is_surfaced() {
        let err = ClientError::Api {
            status: 404,
            message: "Unable to find employee with empId 9".into(),
        };
        assert_eq!(err.user_message(), "Unable to find employee with empId 9");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn empty_api_message_falls_back_to_generic() {
        let err = ClientError::Api {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn parse_errors_use_generic_text() {
        assert_eq!(ClientError::Parse("eof".into()).user_message(), GENERIC_ERROR);
        assert_eq!(ClientError::Parse("eof".into()).status(), None);
    }
}
