//! UI rendering for the form.

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, DialogKind, Focus};
use crate::tui::input::TextInput;

const BACKGROUND: Color = Color::Rgb(0x0f, 0x1e, 0x0f);
const FIELD: Color = Color::Rgb(0x1d, 0x35, 0x20);
const PANE: Color = Color::Rgb(0x1e, 0x3a, 0x22);
const BORDER: Color = Color::Rgb(0x3b, 0x6e, 0x47);
const BUTTON: Color = Color::Rgb(0x28, 0xa7, 0x45);
const BUTTON_ACTIVE: Color = Color::Rgb(0x1f, 0x7f, 0x36);
const ACCENT: Color = Color::LightGreen;

const HINTS: &str = "Tab/Shift+Tab:move | Ctrl+S:save | Enter:next/save | ↑↓:scroll list | Esc:quit";

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    frame.render_widget(
        Block::default().style(Style::default().bg(BACKGROUND).fg(Color::White)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Age
            Constraint::Length(7), // Note
            Constraint::Length(3), // Save
            Constraint::Min(3),    // Transcript
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_line_field(frame, app, "Name", &app.form.name, Focus::Name, chunks[0]);
    render_line_field(frame, app, "Age", &app.form.age, Focus::Age, chunks[1]);
    render_note(frame, app, chunks[2]);
    render_save_button(frame, app, chunks[3]);
    render_transcript(frame, app, chunks[4]);
    render_status_bar(frame, chunks[5]);

    if app.dialog.is_some() {
        render_dialog(frame, app);
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BORDER)
    };

    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border)
        .style(Style::default().bg(FIELD).fg(Color::White))
}

/// Convert a count to a terminal coordinate, saturating.
fn coord(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Terminal columns occupied by `text`; wide characters take two.
fn display_width(text: &str) -> u16 {
    coord(Span::raw(text).width())
}

/// Render a single-line input, scrolled so the cursor stays visible.
fn render_line_field(
    frame: &mut Frame<'_>,
    app: &App<'_>,
    title: &str,
    input: &TextInput,
    focus: Focus,
    area: Rect,
) {
    let focused = app.focus == focus && app.dialog.is_none();
    let inner_width = area.width.saturating_sub(2);
    let cursor = display_width(input.before_cursor());
    let offset = cursor.saturating_sub(inner_width.saturating_sub(1));

    let field = Paragraph::new(input.value())
        .scroll((0, offset))
        .block(field_block(title, focused));
    frame.render_widget(field, area);

    if focused {
        frame.set_cursor_position(Position::new(area.x + 1 + cursor - offset, area.y + 1));
    }
}

fn render_note(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let focused = app.focus == Focus::Note && app.dialog.is_none();
    let inner_height = area.height.saturating_sub(2);
    let inner_width = area.width.saturating_sub(2);
    let (line, before) = app.form.note.cursor_line();
    let (line, col) = (coord(line), display_width(before));
    let row_offset = line.saturating_sub(inner_height.saturating_sub(1));
    let col_offset = col.saturating_sub(inner_width.saturating_sub(1));

    let lines: Vec<Line<'_>> = app.form.note.value().split('\n').map(Line::from).collect();
    let note = Paragraph::new(lines)
        .scroll((row_offset, col_offset))
        .block(field_block("Note", focused));
    frame.render_widget(note, area);

    if focused {
        frame.set_cursor_position(Position::new(
            area.x + 1 + col - col_offset,
            area.y + 1 + line - row_offset,
        ));
    }
}

fn render_save_button(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let focused = app.focus == Focus::Save && app.dialog.is_none();
    let [button] = Layout::horizontal([Constraint::Length(12)])
        .flex(Flex::End)
        .areas(area);

    let style = Style::default()
        .bg(if focused { BUTTON_ACTIVE } else { BUTTON })
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let save = Paragraph::new(Line::from("Save").centered())
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if focused { ACCENT } else { BORDER })),
        );
    frame.render_widget(save, button);
}

/// Render the read-only transcript.
fn render_transcript(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let focused = app.focus == Focus::Transcript && app.dialog.is_none();
    let lines: Vec<Line<'_>> = app.transcript.iter().map(|l| Line::from(l.as_str())).collect();

    let title = Span::styled(
        format!(" {} ", app.language.students_heading()),
        Style::default().add_modifier(Modifier::BOLD),
    );

    let transcript = Paragraph::new(lines)
        .scroll((app.scroll, 0))
        .style(Style::default().bg(PANE).fg(Color::White))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if focused { ACCENT } else { BORDER })),
        );

    frame.render_widget(transcript, area);
}

fn render_status_bar(frame: &mut Frame<'_>, area: Rect) {
    let status = Paragraph::new(HINTS).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn render_dialog(frame: &mut Frame<'_>, app: &App<'_>) {
    let Some(dialog) = &app.dialog else {
        return;
    };

    let [row] = Layout::vertical([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(row);

    let color = match dialog.kind {
        DialogKind::Info => BUTTON,
        DialogKind::Error => Color::Red,
    };

    let body = vec![
        Line::from(""),
        Line::from(dialog.message.as_str()).centered(),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().fg(color).add_modifier(Modifier::BOLD)))
            .centered(),
    ];

    let popup = Paragraph::new(body).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {} ", dialog.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(BACKGROUND).fg(Color::White)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
