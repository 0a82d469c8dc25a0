//! JSON output formatting for gridess.

use serde_json::json;

use crate::error::GridessError;
use crate::students::StudentRecord;

/// Format records as JSON
///
/// # Errors
///
/// Returns `GridessError::Parse` if JSON serialization fails.
pub fn format_records_json(records: &[StudentRecord]) -> Result<String, GridessError> {
    let output = json!({
        "count": records.len(),
        "items": records
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single record as JSON
///
/// # Errors
///
/// Returns `GridessError::Parse` if JSON serialization fails.
pub fn format_record_json(record: &StudentRecord) -> Result<String, GridessError> {
    Ok(serde_json::to_string_pretty(record)?)
}
