//! Student record types and input validation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ValidationError;

/// One stored student entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new record, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: Option<i64>,
    pub note: String,
}

impl NewStudent {
    /// Validate raw form text.
    ///
    /// The name is trimmed and must be non-empty. A blank age means no age;
    /// anything else must parse as a whole number. The note is trimmed and
    /// otherwise unconstrained.
    ///
    /// # Errors
    ///
    /// Returns `MissingName` or `InvalidAge`, checked in that order.
    pub fn parse(name: &str, age_text: &str, note: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let age_text = age_text.trim();
        let age = if age_text.is_empty() {
            None
        } else {
            Some(
                age_text
                    .parse::<i64>()
                    .map_err(|_| ValidationError::InvalidAge(age_text.to_string()))?,
            )
        };

        Ok(Self {
            name: name.to_string(),
            age,
            note: note.trim().to_string(),
        })
    }
}
