//! # nb-db
//!
//! libSQL storage for Nodebucket employee documents.
//!
//! Every employee is one row in the `employees` table; the `todo` and
//! `done` task lists are JSON arrays stored in TEXT columns. Access goes
//! through [`NbDb::run`], which hands a freshly acquired [`StoreHandle`] to a
//! unit of work and releases it when the work completes, succeeds or not.
//!
//! Handlers depend on the [`EmployeeStore`] trait rather than on libSQL, so
//! [`MemoryEmployeeStore`] can stand in for tests.

pub mod error;
pub mod helpers;
mod libsql_store;
mod memory;
mod migrations;
mod store;

pub use error::DatabaseError;
pub use libsql_store::LibsqlEmployeeStore;
pub use memory::MemoryEmployeeStore;
pub use store::EmployeeStore;

use std::future::Future;
use std::time::Duration;

use libsql::Builder;
use nb_config::DatabaseConfig;
use tracing::debug;

/// How long a local connection waits on a locked database file before the
/// statement fails.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the employee document store.
///
/// Holds the opened database only. Connections are created per unit of work
/// by [`NbDb::acquire`] and never reused across calls.
pub struct NbDb {
    db: libsql::Database,
    location: String,
    local: bool,
}

impl NbDb {
    /// Open a local database file, creating the schema on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::StoreUnavailable` if the file cannot be
    /// opened and `DatabaseError::Migration` if schema setup fails.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::StoreUnavailable(format!("open {path}: {e}")))?;
        Self::initialize(db, path.to_string(), true).await
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open_local`].
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await
            .map_err(|e| DatabaseError::StoreUnavailable(format!("open {url}: {e}")))?;
        Self::initialize(db, url.to_string(), false).await
    }

    /// Open whichever store the configuration describes.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open_local`].
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            Self::open_local(&config.path).await
        }
    }

    async fn initialize(
        db: libsql::Database,
        location: String,
        local: bool,
    ) -> Result<Self, DatabaseError> {
        let nb_db = Self { db, location, local };
        let handle = nb_db.acquire()?;
        migrations::run_migrations(handle.conn()).await?;
        debug!(location = %nb_db.location, "employee store ready");
        Ok(nb_db)
    }

    /// Where this store lives (file path or remote URL).
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Establish a new connection.
    ///
    /// Local connections wait up to [`BUSY_TIMEOUT`] for a competing writer,
    /// so overlapping writes serialize instead of failing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::StoreUnavailable` instead of the raw driver
    /// error when the connection cannot be established.
    pub fn acquire(&self) -> Result<StoreHandle, DatabaseError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| DatabaseError::StoreUnavailable(e.to_string()))?;
        if self.local {
            conn.busy_timeout(BUSY_TIMEOUT)
                .map_err(|e| DatabaseError::StoreUnavailable(e.to_string()))?;
        }
        debug!(location = %self.location, "store connection acquired");
        Ok(StoreHandle { conn })
    }

    /// Run a unit of work against a freshly acquired connection.
    ///
    /// The handle is moved into `work`, so it is dropped (and the
    /// connection released) as soon as the returned future finishes,
    /// whether it yields `Ok` or `Err`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::StoreUnavailable` if no connection can be
    /// established, otherwise whatever `work` returns.
    pub async fn run<F, Fut, T>(&self, work: F) -> Result<T, DatabaseError>
    where
        F: FnOnce(StoreHandle) -> Fut,
        Fut: Future<Output = Result<T, DatabaseError>>,
    {
        let handle = self.acquire()?;
        work(handle).await
    }
}

/// One acquired store connection, released on drop.
pub struct StoreHandle {
    conn: libsql::Connection,
}

impl StoreHandle {
    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

impl Drop for StoreHandle {
    fn drop(&mut self) {
        debug!("store connection released");
    }
}
