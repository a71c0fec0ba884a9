//! Database error types for nb-db.

use thiserror::Error;

/// SQLite result codes that mean the store cannot be reached or used right
/// now, as opposed to a statement being wrong.
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;
const SQLITE_IOERR: i32 = 10;
const SQLITE_CANTOPEN: i32 = 14;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The store could not be opened or a connection could not be established.
    #[error("Service unavailable: {0}")]
    StoreUnavailable(String),

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema setup failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// An employee document with this id already exists.
    #[error("Employee {emp_id} already exists")]
    Duplicate { emp_id: i64 },

    /// A task list could not be encoded or decoded as JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Underlying libSQL error that is not a connectivity failure.
    #[error("libSQL error: {0}")]
    LibSql(#[source] libsql::Error),
}

impl DatabaseError {
    /// Whether the failure is a connectivity problem rather than a bad query.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

/// Whether a libSQL error means the store is unreachable or unusable.
///
/// Remote connections are lazy, so a down server first shows up here as a
/// transport error on the first query rather than at connect time.
pub(crate) fn is_transport_failure(error: &libsql::Error) -> bool {
    match error {
        libsql::Error::ConnectionFailed(_) | libsql::Error::Hrana(_) => true,
        libsql::Error::SqliteFailure(code, _) => {
            matches!(
                *code & 0xff,
                SQLITE_BUSY | SQLITE_LOCKED | SQLITE_IOERR | SQLITE_CANTOPEN
            )
        }
        _ => false,
    }
}

impl From<libsql::Error> for DatabaseError {
    fn from(error: libsql::Error) -> Self {
        if is_transport_failure(&error) {
            Self::StoreUnavailable(error.to_string())
        } else {
            Self::LibSql(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failures_are_unavailable() {
        let err = DatabaseError::from(libsql::Error::ConnectionFailed("refused".into()));
        assert!(err.is_unavailable(), "got {err:?}");
        assert!(err.to_string().contains("refused"), "{err}");
    }

    #[test]
    fn locked_database_is_unavailable() {
        let err = DatabaseError::from(libsql::Error::SqliteFailure(
            SQLITE_BUSY,
            "database is locked".into(),
        ));
        assert!(err.is_unavailable(), "got {err:?}");
    }

    #[test]
    fn extended_io_codes_are_unavailable() {
        // SQLITE_IOERR_WRITE = SQLITE_IOERR | (3 << 8)
        let err = DatabaseError::from(libsql::Error::SqliteFailure(
            SQLITE_IOERR | (3 << 8),
            "disk I/O error".into(),
        ));
        assert!(err.is_unavailable(), "got {err:?}");
    }

    #[test]
    fn statement_errors_stay_libsql() {
        // SQLITE_CONSTRAINT
        let err = DatabaseError::from(libsql::Error::SqliteFailure(19, "UNIQUE failed".into()));
        assert!(matches!(err, DatabaseError::LibSql(_)), "got {err:?}");
        assert!(!err.is_unavailable());
    }
}
