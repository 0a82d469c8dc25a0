//! Event handling for the form.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::GridessError;
use crate::tui::app::{App, Focus};

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Save the form contents.
    Save,
}

/// Poll for a terminal event and apply it.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App<'_>) -> Result<Option<Action>, GridessError> {
    if event::poll(Duration::from_millis(100))
        .map_err(|e| GridessError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| GridessError::Config(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key));
            }
        }
    }

    Ok(None)
}

/// Apply a single key press to the app state.
pub fn handle_key(app: &mut App<'_>, key: KeyEvent) -> Option<Action> {
    // AltGr arrives as Ctrl+Alt on some platforms.
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Dialogs are modal.
    if app.dialog.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_dialog();
        }
        return None;
    }

    if ctrl {
        return (key.code == KeyCode::Char('s')).then_some(Action::Save);
    }

    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        _ => match app.focus {
            Focus::Name | Focus::Age | Focus::Note => edit_field(app, key.code),
            Focus::Save => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    return Some(Action::Save);
                }
            }
            Focus::Transcript => scroll_transcript(app, key.code),
        },
    }

    None
}

fn edit_field(app: &mut App<'_>, code: KeyCode) {
    let focus = app.focus;

    if code == KeyCode::Enter && focus != Focus::Note {
        app.focus_next();
        return;
    }

    let Some(field) = app.form.field_mut(focus) else {
        return;
    };

    match code {
        KeyCode::Char(c) => field.insert(c),
        KeyCode::Enter => field.insert('\n'),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}

fn scroll_transcript(app: &mut App<'_>, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_start(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;
    use crate::storage::Database;
    use crate::students::{StudentStorage, StudentStore};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            assert_eq!(handle_key(app, press(KeyCode::Char(c))), None);
        }
    }

    fn storage() -> StudentStorage {
        StudentStorage::with_database(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_typing_fills_focused_fields() {
        let store = storage();
        let mut app = App::new(&store, Language::En).unwrap();

        type_text(&mut app, "Alice");
        handle_key(&mut app, press(KeyCode::Enter));
        type_text(&mut app, "20");
        handle_key(&mut app, press(KeyCode::Tab));
        type_text(&mut app, "line one");
        handle_key(&mut app, press(KeyCode::Enter));
        type_text(&mut app, "two");

        assert_eq!(app.form.name.value(), "Alice");
        assert_eq!(app.form.age.value(), "20");
        assert_eq!(app.form.note.value(), "line one\ntwo");
        assert_eq!(app.focus, Focus::Note);
    }

    #[test]
    fn test_enter_on_save_button() {
        let store = storage();
        let mut app = App::new(&store, Language::En).unwrap();

        app.focus = Focus::Save;
        assert_eq!(handle_key(&mut app, press(KeyCode::Enter)), Some(Action::Save));
    }

    #[test]
    fn test_ctrl_s_saves_from_any_field() {
        let store = storage();
        let mut app = App::new(&store, Language::En).unwrap();

        type_text(&mut app, "s");
        assert_eq!(handle_key(&mut app, ctrl('s')), Some(Action::Save));
        assert_eq!(app.form.name.value(), "s");
    }

    #[test]
    fn test_dialog_is_modal() {
        let store = storage();
        let mut app = App::new(&store, Language::En).unwrap();

        app.save();
        assert!(app.dialog.is_some());

        assert_eq!(handle_key(&mut app, press(KeyCode::Char('x'))), None);
        assert_eq!(handle_key(&mut app, ctrl('s')), None);
        assert_eq!(app.form.name.value(), "");
        assert!(app.dialog.is_some());

        assert_eq!(handle_key(&mut app, press(KeyCode::Esc)), None);
        assert!(app.dialog.is_none());
    }

    #[test]
    fn test_quit_keys() {
        let store = storage();
        let mut app = App::new(&store, Language::En).unwrap();

        assert_eq!(handle_key(&mut app, press(KeyCode::Esc)), Some(Action::Quit));

        app.save();
        assert_eq!(handle_key(&mut app, ctrl('c')), Some(Action::Quit));
    }

    #[test]
    fn test_transcript_keys_scroll_not_type() {
        let store = storage();
        store.insert("A", "", "").unwrap();
        store.insert("B", "", "").unwrap();
        let mut app = App::new(&store, Language::En).unwrap();

        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::Transcript);

        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.scroll, 1);
        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.scroll, 0);
        assert_eq!(app.form.name.value(), "");
    }
}
