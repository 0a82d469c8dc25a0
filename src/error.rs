//! Error types for gridess.

use thiserror::Error;

/// Rejections raised while validating form input, before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name was empty or whitespace-only.
    #[error("Name is required")]
    MissingName,

    /// The age text was non-empty but not a whole number.
    #[error("Age must be a number")]
    InvalidAge(String),
}

/// Top-level error for every gridess operation.
#[derive(Debug, Error)]
pub enum GridessError {
    /// User input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The database could not be opened, read or written.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration, path or terminal setup failure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization failure.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GridessError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl GridessError {
    /// Whether this error is a recoverable input problem rather than a storage fault.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
