//! Schema setup.
//!
//! Embeds the SQL file at compile time and executes it whenever a store is
//! opened. Statements use `IF NOT EXISTS`, so re-running is harmless.

use crate::error::{DatabaseError, is_transport_failure};

const MIGRATION_001: &str = include_str!("../migrations/001_employees.sql");

/// Run all embedded schema scripts on the given connection.
pub(crate) async fn run_migrations(conn: &libsql::Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(MIGRATION_001)
        .await
        .map_err(|e| {
            if is_transport_failure(&e) {
                DatabaseError::StoreUnavailable(format!("001_employees: {e}"))
            } else {
                DatabaseError::Migration(format!("001_employees: {e}"))
            }
        })?;
    Ok(())
}
