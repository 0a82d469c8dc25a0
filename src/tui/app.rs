//! Application state for the form.

use crate::config::Language;
use crate::error::GridessError;
use crate::output::transcript_lines;
use crate::students::StudentStore;
use crate::tui::input::TextInput;

/// Lines moved by PageUp/PageDown in the transcript.
const PAGE: u16 = 10;

/// Which part of the form receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Age,
    Note,
    Save,
    Transcript,
}

impl Focus {
    const ORDER: [Self; 5] = [Self::Name, Self::Age, Self::Note, Self::Save, Self::Transcript];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// The three input fields.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub name: TextInput,
    pub age: TextInput,
    pub note: TextInput,
}

impl FormState {
    pub fn clear(&mut self) {
        self.name.clear();
        self.age.clear();
        self.note.clear();
    }

    /// The editable field for a focus target, if it is one.
    pub fn field_mut(&mut self, focus: Focus) -> Option<&mut TextInput> {
        match focus {
            Focus::Name => Some(&mut self.name),
            Focus::Age => Some(&mut self.age),
            Focus::Note => Some(&mut self.note),
            Focus::Save | Focus::Transcript => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

/// A modal message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

/// Application state.
pub struct App<'a> {
    store: &'a dyn StudentStore,
    /// Interface language for messages.
    pub language: Language,
    /// Field contents.
    pub form: FormState,
    /// Focused element.
    pub focus: Focus,
    /// Last successfully loaded transcript.
    pub transcript: Vec<String>,
    /// First visible transcript line.
    pub scroll: u16,
    /// Open dialog, if any. Blocks other input while shown.
    pub dialog: Option<Dialog>,
}

impl<'a> App<'a> {
    /// Create a new app instance with the current transcript loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the records fails.
    pub fn new(store: &'a dyn StudentStore, language: Language) -> Result<Self, GridessError> {
        let mut app = Self {
            store,
            language,
            form: FormState::default(),
            focus: Focus::default(),
            transcript: Vec::new(),
            scroll: 0,
            dialog: None,
        };
        app.refresh()?;
        Ok(app)
    }

    /// Reload the transcript from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the records fails; the previous transcript is kept.
    pub fn refresh(&mut self) -> Result<(), GridessError> {
        let records = self.store.list_all()?;
        self.transcript = transcript_lines(&records, self.language);
        self.clamp_scroll();
        Ok(())
    }

    /// Save the form contents.
    ///
    /// On success the fields are cleared, the transcript reloaded and a
    /// confirmation shown. On failure the fields and transcript are left as
    /// they were and the error message is shown.
    pub fn save(&mut self) {
        let result = self.store.insert(
            self.form.name.value(),
            self.form.age.value(),
            self.form.note.value(),
        );

        match result {
            Ok(record) => {
                tracing::debug!(id = record.id, "form saved");
                self.form.clear();
                self.focus = Focus::Name;
                match self.refresh() {
                    Ok(()) => {
                        self.scroll_to_end();
                        self.show_info(self.language.saved_title(), self.language.saved());
                    }
                    Err(e) => self.show_error(&e),
                }
            }
            Err(e) => self.show_error(&e),
        }
    }

    fn show_info(&mut self, title: &str, message: &str) {
        self.dialog = Some(Dialog {
            kind: DialogKind::Info,
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn show_error(&mut self, error: &GridessError) {
        let title = if error.is_validation() {
            self.language.invalid_input_title()
        } else {
            tracing::warn!(error = %error, "save failed");
            self.language.error_title()
        };

        self.dialog = Some(Dialog {
            kind: DialogKind::Error,
            title: title.to_string(),
            message: error.to_string(),
        });
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.transcript.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
    }

    pub fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(PAGE);
    }

    pub fn page_down(&mut self) {
        self.scroll = self.scroll.saturating_add(PAGE).min(self.max_scroll());
    }

    pub fn scroll_to_start(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll = self.max_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use crate::students::{MockStudentStore, StudentStorage};

    fn storage() -> StudentStorage {
        StudentStorage::with_database(Database::open_in_memory().unwrap())
    }

    fn fill(app: &mut App<'_>, name: &str, age: &str, note: &str) {
        app.form.name.set(name);
        app.form.age.set(age);
        app.form.note.set(note);
    }

    #[test]
    fn test_empty_transcript_placeholder() {
        let store = storage();
        let app = App::new(&store, Language::Sq).unwrap();
        assert_eq!(app.transcript, vec!["Nuk ka regjistrime."]);
        assert!(app.dialog.is_none());
    }

    #[test]
    fn test_successful_save_clears_and_refreshes() {
        let store = storage();
        let mut app = App::new(&store, Language::En).unwrap();

        fill(&mut app, "  Alice ", "20", "Good student");
        app.focus = Focus::Save;
        app.save();

        assert_eq!(app.form.name.value(), "");
        assert_eq!(app.form.age.value(), "");
        assert_eq!(app.form.note.value(), "");
        assert_eq!(app.focus, Focus::Name);
        assert_eq!(app.transcript, vec!["1: Alice | age: 20 | Good student"]);
        let dialog = app.dialog.clone().unwrap();
        assert_eq!(dialog.kind, DialogKind::Info);
        assert_eq!(dialog.message, "Record saved successfully.");

        app.dismiss_dialog();
        fill(&mut app, "Bob", "", "");
        app.save();
        assert_eq!(app.transcript[1], "2: Bob | age: - | ");
    }

    #[test]
    fn test_missing_name_keeps_fields() {
        let store = storage();
        let mut app = App::new(&store, Language::En).unwrap();

        fill(&mut app, "", "30", "x");
        app.save();

        assert_eq!(app.form.name.value(), "");
        assert_eq!(app.form.age.value(), "30");
        assert_eq!(app.form.note.value(), "x");
        assert_eq!(app.transcript, vec!["No records."]);
        assert_eq!(store.count().unwrap(), 0);

        let dialog = app.dialog.unwrap();
        assert_eq!(dialog.kind, DialogKind::Error);
        assert_eq!(dialog.title, "Invalid input");
        assert_eq!(dialog.message, "Name is required");
    }

    #[test]
    fn test_invalid_age_shows_error() {
        let store = storage();
        let mut app = App::new(&store, Language::En).unwrap();

        fill(&mut app, "Carl", "twelve", "x");
        app.save();

        assert_eq!(app.form.age.value(), "twelve");
        assert_eq!(app.dialog.unwrap().message, "Age must be a number");
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_storage_failure_keeps_transcript() {
        let mut store = MockStudentStore::new();
        store.expect_list_all().times(1).returning(|| Ok(Vec::new()));
        store
            .expect_insert()
            .returning(|_, _, _| Err(GridessError::Database("disk I/O error".to_string())));

        let mut app = App::new(&store, Language::En).unwrap();
        fill(&mut app, "Dana", "", "");
        app.save();

        assert_eq!(app.form.name.value(), "Dana");
        assert_eq!(app.transcript, vec!["No records."]);
        let dialog = app.dialog.unwrap();
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.message, "Database error: disk I/O error");
    }

    #[test]
    fn test_focus_cycles() {
        let mut focus = Focus::Name;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Name);
        assert_eq!(Focus::Name.previous(), Focus::Transcript);
        assert_eq!(Focus::Note.next(), Focus::Save);
    }

    #[test]
    fn test_scroll_bounds() {
        let store = storage();
        for i in 0..15 {
            store.insert(&format!("S{i}"), "", "").unwrap();
        }
        let mut app = App::new(&store, Language::En).unwrap();

        app.scroll_up();
        assert_eq!(app.scroll, 0);
        app.page_down();
        assert_eq!(app.scroll, 10);
        app.page_down();
        assert_eq!(app.scroll, 14);
        app.scroll_down();
        assert_eq!(app.scroll, 14);
        app.scroll_to_start();
        assert_eq!(app.scroll, 0);
    }
}
