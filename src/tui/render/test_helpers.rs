use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Position;
use tempfile::TempDir;

use crate::io::store::STORE_FILE_NAME;
use crate::model::TodoList;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Buffer contents as plain text (no styles), trailing blanks trimmed.
pub fn buffer_to_string(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the full app into an in-memory buffer and return plain text.
pub fn render_app(app: &mut App, w: u16, h: u16) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| super::render(frame, app)).unwrap();
    buffer_to_string(&terminal)
}

/// Render the full app and return where the terminal cursor ended up.
pub fn cursor_after_render(app: &mut App, w: u16, h: u16) -> Position {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| super::render(frame, app)).unwrap();
    terminal.get_cursor_position().unwrap()
}

/// An App over `todos` whose store lives in `dir` (not yet written).
pub fn app_in(dir: &TempDir, todos: TodoList) -> App {
    App::new(todos, dir.path().join(STORE_FILE_NAME))
}

/// A plain key press.
pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
