//! Transcript formatting.
//!
//! One line per record: `{id}: {name} | age: {age or '-'} | {note preview}`.

use colored::Colorize;

use crate::config::Language;
use crate::students::StudentRecord;

/// Longest note shown in full; longer notes are cut here.
pub const NOTE_PREVIEW_CHARS: usize = 60;

/// Marker appended to a truncated note.
pub const ELLIPSIS: &str = "...";

/// Flatten a note onto one line and shorten it to [`NOTE_PREVIEW_CHARS`]
/// characters plus [`ELLIPSIS`].
///
/// Each line break (`\n`, `\r\n` or `\r`) becomes a single space, so a
/// record never spans more than one transcript line.
#[must_use]
pub fn note_preview(note: &str) -> String {
    let flat = note.replace("\r\n", " ").replace(['\n', '\r'], " ");
    match flat.char_indices().nth(NOTE_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &flat[..cut]),
        None => flat,
    }
}

/// Render a single record as a transcript line.
#[must_use]
pub fn transcript_line(record: &StudentRecord) -> String {
    let age = record
        .age
        .map_or_else(|| "-".to_string(), |age| age.to_string());

    format!(
        "{}: {} | age: {} | {}",
        record.id,
        record.name,
        age,
        note_preview(&record.note)
    )
}

/// Render every record, or the language's placeholder when there are none.
#[must_use]
pub fn transcript_lines(records: &[StudentRecord], language: Language) -> Vec<String> {
    if records.is_empty() {
        return vec![language.empty_transcript().to_string()];
    }

    records.iter().map(transcript_line).collect()
}

/// Colored transcript for terminal output.
#[must_use]
pub fn format_transcript_pretty(records: &[StudentRecord], language: Language) -> String {
    let mut output = format!("{} ({})\n", language.students_heading().bold(), records.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    if records.is_empty() {
        output.push_str(&language.empty_transcript().dimmed().to_string());
        return output;
    }

    let lines: Vec<String> = records.iter().map(format_record_pretty).collect();
    output.push_str(&lines.join("\n"));
    output
}

/// Colored single-record line.
#[must_use]
pub fn format_record_pretty(record: &StudentRecord) -> String {
    let age = record
        .age
        .map_or_else(|| "-".dimmed().to_string(), |age| age.to_string().yellow().to_string());

    format!(
        "{}: {} | age: {} | {}",
        record.id.to_string().cyan(),
        record.name.bold(),
        age,
        note_preview(&record.note)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: i64, name: &str, age: Option<i64>, note: &str) -> StudentRecord {
        StudentRecord {
            id,
            name: name.to_string(),
            age,
            note: note.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_line_with_age() {
        let line = transcript_line(&record(1, "Alice", Some(20), "Good student"));
        assert_eq!(line, "1: Alice | age: 20 | Good student");
    }

    #[test]
    fn test_line_without_age_or_note() {
        let line = transcript_line(&record(2, "Bob", None, ""));
        assert_eq!(line, "2: Bob | age: - | ");
    }

    #[test]
    fn test_note_at_limit_is_verbatim() {
        let note = "a".repeat(60);
        assert_eq!(note_preview(&note), note);
    }

    #[test]
    fn test_long_note_truncated() {
        let note = "b".repeat(61);
        let preview = note_preview(&note);
        assert_eq!(preview, format!("{}...", "b".repeat(60)));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let note = "ë".repeat(75);
        let preview = note_preview(&note);
        assert_eq!(preview.chars().count(), 63);
        assert!(preview.starts_with(&"ë".repeat(60)));
    }

    #[test]
    fn test_empty_placeholder() {
        assert_eq!(transcript_lines(&[], Language::En), vec!["No records."]);
        assert_eq!(transcript_lines(&[], Language::Sq), vec!["Nuk ka regjistrime."]);
    }

    #[test]
    fn test_transcript_one_line_per_record() {
        let records = vec![
            record(1, "Alice", Some(20), "Good student"),
            record(2, "Bob", None, ""),
        ];
        assert_eq!(
            transcript_lines(&records, Language::En),
            vec!["1: Alice | age: 20 | Good student", "2: Bob | age: - | "]
        );
    }

    #[test]
    fn test_multiline_note_stays_on_one_line() {
        let line = transcript_line(&record(1, "Alice", Some(20), "line one\ntwo\r\nthree\rfour"));
        assert_eq!(line, "1: Alice | age: 20 | line one two three four");
    }

    #[test]
    fn test_line_breaks_flattened_before_truncation() {
        let note = format!("{}\n{}", "a".repeat(30), "b".repeat(40));
        let preview = note_preview(&note);
        assert!(!preview.contains('\n'));
        assert_eq!(preview, format!("{} {}...", "a".repeat(30), "b".repeat(29)));
    }

    #[test]
    fn test_pretty_transcript_contains_records() {
        colored::control::set_override(false);
        let records = vec![record(3, "Carl", Some(9), "x")];
        let output = format_transcript_pretty(&records, Language::En);
        assert!(output.starts_with("Students (1)"));
        assert!(output.ends_with("3: Carl | age: 9 | x"));
    }
}
