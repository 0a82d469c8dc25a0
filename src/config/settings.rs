//! Configuration settings for gridess.
//!
//! Settings are loaded from `gridess.yaml` next to the executable.

use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::args::OutputFormat;
use crate::error::GridessError;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Optional override for the database location.
    #[serde(default)]
    pub database: Option<PathBuf>,
}

/// General application settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Interface language for user-facing messages.
    #[serde(default)]
    pub language: Language,
    /// Default output format for headless commands.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Interface language.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Albanian.
    Sq,
}

impl Language {
    /// Placeholder shown in place of an empty transcript.
    #[must_use]
    pub const fn empty_transcript(self) -> &'static str {
        match self {
            Self::En => "No records.",
            Self::Sq => "Nuk ka regjistrime.",
        }
    }

    /// Confirmation shown after a successful save.
    #[must_use]
    pub const fn saved(self) -> &'static str {
        match self {
            Self::En => "Record saved successfully.",
            Self::Sq => "Regjistrimi u ruajt me sukses.",
        }
    }

    /// Title of the success dialog.
    #[must_use]
    pub const fn saved_title(self) -> &'static str {
        match self {
            Self::En => "Saved",
            Self::Sq => "U ruajt",
        }
    }

    /// Title of the dialog shown for rejected input.
    #[must_use]
    pub const fn invalid_input_title(self) -> &'static str {
        match self {
            Self::En => "Invalid input",
            Self::Sq => "Të dhëna të pavlefshme",
        }
    }

    /// Title of the dialog shown for storage failures.
    #[must_use]
    pub const fn error_title(self) -> &'static str {
        match self {
            Self::En => "Error",
            Self::Sq => "Gabim",
        }
    }

    /// Heading above the transcript.
    #[must_use]
    pub const fn students_heading(self) -> &'static str {
        match self {
            Self::En => "Students",
            Self::Sq => "Studentët",
        }
    }
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            default_output: default_output_format(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, GridessError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            GridessError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            GridessError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.language, Language::En);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gridess.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.general.language, Language::En);
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gridess.yaml");

        let yaml = r"
general:
  language: sq
  default_output: json
database: /srv/students.db
";
        std::fs::write(&config_path, yaml).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.general.language, Language::Sq);
        assert_eq!(loaded.general.default_output, OutputFormat::Json);
        assert_eq!(loaded.database, Some(PathBuf::from("/srv/students.db")));
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gridess.yaml");

        let partial_yaml = r"
general:
  language: sq
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.general.language, Language::Sq);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gridess.yaml");
        std::fs::write(&config_path, "general:\n  language: klingon\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, GridessError::Config(_)));
    }

    #[test]
    fn test_language_messages() {
        assert_eq!(Language::Sq.empty_transcript(), "Nuk ka regjistrime.");
        assert_eq!(Language::Sq.saved(), "Regjistrimi u ruajt me sukses.");
        assert_eq!(Language::En.empty_transcript(), "No records.");
    }
}
