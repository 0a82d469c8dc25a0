//! Command implementations for gridess.
//!
//! Each command returns the text to print; `main` handles the printing.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{AddArgs, Cli, OutputFormat};
use crate::config::Language;
use crate::error::GridessError;
use crate::output::{format_record, format_records};
use crate::students::StudentStore;

/// Execute add command
///
/// # Errors
///
/// Returns a validation error, a database error, or a formatting error.
pub fn add(
    store: &dyn StudentStore,
    args: &AddArgs,
    format: OutputFormat,
) -> Result<String, GridessError> {
    let record = store.insert(&args.name, &args.age, &args.note)?;
    format_record(&record, format)
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if the query or output formatting fails.
pub fn list(
    store: &dyn StudentStore,
    language: Language,
    format: OutputFormat,
) -> Result<String, GridessError> {
    let records = store.list_all()?;
    format_records(&records, language, format)
}

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, GridessError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "gridess", &mut buf);
    String::from_utf8(buf).map_err(|e| GridessError::Parse(format!("UTF-8 error: {e}")))
}
