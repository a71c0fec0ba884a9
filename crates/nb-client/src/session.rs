//! Sign-in and the persisted session.
//!
//! The session is a small TOML file naming the signed-in employee. It
//! expires one day after sign-in.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::client::TaskApi;
use crate::error::ClientError;

/// Lifetime of a session after sign-in.
pub const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub emp_id: i64,
    pub display_name: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionUser {
    #[must_use]
    pub fn new(emp_id: i64, display_name: impl Into<String>) -> Self {
        Self {
            emp_id,
            display_name: display_name.into(),
            expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// File-backed session storage.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current session. Missing and expired sessions are `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] if the file exists but cannot be read
    /// or parsed.
    pub fn load(&self) -> Result<Option<SessionUser>, ClientError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| ClientError::Session(format!("{}: {e}", self.path.display())))?;
        let user: SessionUser =
            toml::from_str(&raw).map_err(|e| ClientError::Session(e.to_string()))?;
        if user.is_expired(Utc::now()) {
            debug!(emp_id = user.emp_id, "session expired");
            return Ok(None);
        }
        Ok(Some(user))
    }

    /// Persist `user`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] on I/O or encoding failure.
    pub fn save(&self, user: &SessionUser) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::Session(format!("{}: {e}", parent.display())))?;
        }
        let raw = toml::to_string(user).map_err(|e| ClientError::Session(e.to_string()))?;
        std::fs::write(&self.path, raw)
            .map_err(|e| ClientError::Session(format!("{}: {e}", self.path.display())))?;
        info!(emp_id = user.emp_id, path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Remove the session file. Succeeds when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] if the file exists but cannot be
    /// removed.
    pub fn clear(&self) -> Result<(), ClientError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Session(format!("{}: {e}", self.path.display()))),
        }
    }
}

/// The signed-in user, or [`ClientError::NotSignedIn`].
///
/// # Errors
///
/// Returns [`ClientError::NotSignedIn`] when no live session exists, or
/// [`ClientError::Session`] when the session file is unreadable.
pub fn require_session(store: &SessionStore) -> Result<SessionUser, ClientError> {
    store.load()?.ok_or(ClientError::NotSignedIn)
}

/// Parse a typed employee id: ASCII digits only, non-empty.
///
/// # Errors
///
/// Returns [`ClientError::InvalidEmployeeId`] otherwise.
pub fn parse_typed_emp_id(raw: &str) -> Result<i64, ClientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClientError::InvalidEmployeeId(raw.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| ClientError::InvalidEmployeeId(raw.to_string()))
}

/// The sign-in form: validate the id, then look the employee up.
pub struct SignIn<A: TaskApi> {
    api: A,
}

impl<A: TaskApi> SignIn<A> {
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Resolve a typed employee id to a session user.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEmployeeId`] for non-numeric input
    /// (without contacting the server), or the server's error otherwise.
    pub async fn submit(&self, raw: &str) -> Result<SessionUser, ClientError> {
        let emp_id = parse_typed_emp_id(raw)?;
        let employee = self.api.get_employee(emp_id).await?;
        Ok(SessionUser::new(employee.emp_id, employee.display_name()))
    }
}
