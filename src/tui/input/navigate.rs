use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::todo_ops;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let len = app.todos.len();
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        (_, KeyCode::Down) => {
            app.selected = todo_ops::select_next(app.selected, len);
        }
        (_, KeyCode::Up) => {
            app.selected = todo_ops::select_prev(app.selected, len);
        }

        (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            if todo_ops::toggle_todo(&mut app.todos, app.selected).is_some() {
                app.save();
            }
        }

        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.add_buffer.clear();
            app.mode = Mode::Add;
        }

        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if len > 0 {
                app.mode = Mode::ConfirmDelete;
            }
        }

        _ => {}
    }
}
