//! Path resolution for gridess data files.
//!
//! Everything lives next to the executable:
//! - `gridess.yaml` - Configuration file
//! - `students.db` - SQLite database holding the student records
//! - `gridess.log` - Log output (the terminal belongs to the form)

use std::path::{Path, PathBuf};

use crate::error::GridessError;

/// Paths to gridess configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config file: `<root>/gridess.yaml`
    pub config_file: PathBuf,
    /// Database file: `<root>/students.db`
    pub database: PathBuf,
    /// Log file: `<root>/gridess.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths rooted at the directory of the running executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable location cannot be determined.
    pub fn new() -> Result<Self, GridessError> {
        let exe = std::env::current_exe().map_err(|e| {
            GridessError::Config(format!("Could not determine executable location: {e}"))
        })?;

        let root = exe.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        Ok(Self::with_root(root))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("gridess.yaml"),
            database: root.join("students.db"),
            log_file: root.join("gridess.log"),
        }
    }

    /// Replace the database location, keeping the log file beside it.
    #[must_use]
    pub fn with_database(mut self, database: PathBuf) -> Self {
        let dir = database
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        self.log_file = dir.join("gridess.log");
        self.database = database;
        self
    }

    /// Ensure the directory holding the database exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), GridessError> {
        let Some(dir) = self.database.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };

        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| {
                GridessError::Config(format!("Failed to create directory {}: {e}", dir.display()))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".")))
    }
}
