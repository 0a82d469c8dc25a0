//! Terminal User Interface (TUI) for gridess.
//!
//! A single window holding the entry form and the transcript of all records.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod input;
mod ui;

pub use app::{App, Dialog, DialogKind, Focus, FormState};
pub use input::TextInput;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Language;
use crate::error::GridessError;
use crate::students::StudentStore;

/// Run the form until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or the initial
/// transcript cannot be loaded.
pub fn run(store: &dyn StudentStore, language: Language) -> Result<(), GridessError> {
    // Load before touching the terminal so startup errors print normally.
    let mut app = App::new(store, language)?;

    enable_raw_mode()
        .map_err(|e| GridessError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| GridessError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| GridessError::Config(format!("Failed to create terminal: {e}")))?;

    tracing::debug!("form opened");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), GridessError> {
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| GridessError::Config(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::Save => app.save(),
            }
        }
    }

    Ok(())
}
