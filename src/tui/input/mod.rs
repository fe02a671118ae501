mod add;
mod confirm;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use add::handle_add;
use confirm::handle_confirm_delete;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    // Raw mode swallows SIGINT, so Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add => handle_add(app, key),
        Mode::ConfirmDelete => handle_confirm_delete(app, key),
    }
}

/// Handle a bracketed paste event. Only Add mode accepts text.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode != Mode::Add || text.is_empty() {
        return;
    }
    let clean = crate::util::unicode::single_line(text);
    app.add_buffer.push_str(&clean);
}
