//! Database migrations for gridess.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::GridessError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, GridessError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| GridessError::Database(format!("Failed to get schema version: {e}")))
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), GridessError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| GridessError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), GridessError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        tracing::debug!(version = current, "schema up to date");
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::info!(version, "applying schema migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), GridessError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(GridessError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: the `students` table.
fn migrate_v1(conn: &Connection) -> Result<(), GridessError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            age INTEGER,
            note TEXT,
            created_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| GridessError::Database(format!("Migration v1 failed: {e}")))
}
