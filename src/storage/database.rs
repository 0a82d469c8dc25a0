//! `SQLite` database connection.
//!
//! The database is stored next to the executable as `students.db` unless a
//! different location is configured. Opening it creates the file and the
//! `students` table when they are missing.

use std::path::Path;

use rusqlite::Connection;

use crate::error::GridessError;

use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary. Safe to
    /// call on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &Path) -> Result<Self, GridessError> {
        tracing::info!(path = %path.display(), "opening database");

        let conn = Connection::open(path).map_err(|e| {
            GridessError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.migrate()?;
        tracing::debug!(version = db.schema_version()?, "database ready");

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, GridessError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            GridessError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Ensure the schema exists. Idempotent.
    fn migrate(&self) -> Result<(), GridessError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, GridessError> {
        migrations::get_version(&self.conn)
    }

    /// Get a reference to the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
