//! Student record storage.
//!
//! Persists student records to the local database.

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Row};

use super::types::{NewStudent, StudentRecord};
use crate::error::GridessError;
use crate::storage::Database;

/// Operations the form needs from the persistence layer.
#[cfg_attr(test, mockall::automock)]
pub trait StudentStore {
    /// Validate and persist one record, returning it as stored.
    ///
    /// # Errors
    ///
    /// Returns a validation error (nothing written) or a database error.
    fn insert(&self, name: &str, age_text: &str, note: &str) -> Result<StudentRecord, GridessError>;

    /// Every stored record in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_all(&self) -> Result<Vec<StudentRecord>, GridessError>;
}

/// `SQLite`-backed storage for student records.
pub struct StudentStorage {
    db: Database,
}

impl StudentStorage {
    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Write an already validated record.
    fn write(&self, student: NewStudent) -> Result<StudentRecord, GridessError> {
        let conn = self.db.connection();
        let created_at = Utc::now();

        conn.execute(
            "INSERT INTO students (name, age, note, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![student.name, student.age, student.note, created_at.to_rfc3339()],
        )
        .map_err(|e| {
            tracing::warn!(error = %e, "insert failed");
            GridessError::Database(format!("Failed to insert student: {e}"))
        })?;

        let id = conn.last_insert_rowid();
        tracing::info!(id, "student saved");

        Ok(StudentRecord {
            id,
            name: student.name,
            age: student.age,
            note: student.note,
            created_at,
        })
    }

    /// Number of stored records (for testing).
    #[cfg(test)]
    pub fn count(&self) -> Result<i64, GridessError> {
        self.db
            .connection()
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))
            .map_err(|e| GridessError::Database(format!("Failed to count students: {e}")))
    }
}

impl StudentStore for StudentStorage {
    fn insert(&self, name: &str, age_text: &str, note: &str) -> Result<StudentRecord, GridessError> {
        let student = NewStudent::parse(name, age_text, note)
            .inspect_err(|e| tracing::debug!(reason = %e, "rejected student input"))?;
        self.write(student)
    }

    fn list_all(&self) -> Result<Vec<StudentRecord>, GridessError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare("SELECT id, name, age, note, created_at FROM students ORDER BY id")
            .map_err(|e| GridessError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_record)
            .map_err(|e| GridessError::Database(format!("Failed to query students: {e}")))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| GridessError::Database(e.to_string()))?);
        }

        Ok(records)
    }
}

/// Convert a database row to a `StudentRecord`.
fn row_to_record(row: &Row<'_>) -> Result<StudentRecord, rusqlite::Error> {
    let created_at_str: String = row.get(4)?;
    let created_at = parse_timestamp(&created_at_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            format!("invalid created_at: {created_at_str}").into(),
        )
    })?;

    Ok(StudentRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        note: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        created_at,
    })
}

/// Parse a stored timestamp. Naive ISO-8601 values are taken as UTC.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|t| t.and_utc())
        })
}
