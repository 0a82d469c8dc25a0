//! Output formatting for gridess.
//!
//! The transcript format is shared by the form and the `list` command.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Language;
use crate::error::GridessError;
use crate::students::StudentRecord;

pub use json::*;
pub use pretty::*;

/// Format all records based on output format
///
/// # Errors
///
/// Returns `GridessError::Parse` if JSON serialization fails.
pub fn format_records(
    records: &[StudentRecord],
    language: Language,
    format: OutputFormat,
) -> Result<String, GridessError> {
    match format {
        OutputFormat::Pretty => Ok(format_transcript_pretty(records, language)),
        OutputFormat::Json => format_records_json(records),
    }
}

/// Format a single record based on output format
///
/// # Errors
///
/// Returns `GridessError::Parse` if JSON serialization fails.
pub fn format_record(record: &StudentRecord, format: OutputFormat) -> Result<String, GridessError> {
    match format {
        OutputFormat::Pretty => Ok(format_record_pretty(record)),
        OutputFormat::Json => format_record_json(record),
    }
}
