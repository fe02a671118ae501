use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::todo_ops;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Abort: list untouched
        (_, KeyCode::Esc) => {
            app.add_buffer.clear();
            app.mode = Mode::Navigate;
        }

        // Commit: an empty buffer appends nothing
        (_, KeyCode::Enter) => {
            let text = std::mem::take(&mut app.add_buffer);
            app.mode = Mode::Navigate;
            if todo_ops::add_todo(&mut app.todos, text) {
                app.save();
            }
        }

        (_, KeyCode::Backspace) => {
            unicode::pop_grapheme(&mut app.add_buffer);
        }

        (m, KeyCode::Char(c))
            if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) && !c.is_control() =>
        {
            app.add_buffer.push(c);
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::load_todos;
    use crate::model::{Todo, TodoList};
    use crate::tui::render::test_helpers::{app_in, press};
    use tempfile::TempDir;

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_add(app, press(KeyCode::Char(c)));
        }
    }

    fn adding(dir: &TempDir) -> App {
        let mut app = app_in(dir, TodoList::default());
        app.mode = Mode::Add;
        app
    }

    #[test]
    fn enter_commits_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir);
        type_str(&mut app, "buy milk");
        handle_add(&mut app, press(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.todos.items, vec![Todo::new("buy milk")]);
        assert!(app.add_buffer.is_empty());
        assert_eq!(load_todos(&app.store_path).unwrap(), app.todos);
    }

    #[test]
    fn enter_on_empty_buffer_appends_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir);
        handle_add(&mut app, press(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.todos.is_empty());
        assert!(!app.store_path.exists());
    }

    #[test]
    fn backspace_then_escape_discards() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir);
        type_str(&mut app, "abc");
        handle_add(&mut app, press(KeyCode::Backspace));
        handle_add(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.add_buffer, "a");
        handle_add(&mut app, press(KeyCode::Esc));

        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.add_buffer.is_empty());
        assert!(app.todos.is_empty());
        assert!(!app.store_path.exists());
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir);
        handle_add(&mut app, press(KeyCode::Backspace));
        assert!(app.add_buffer.is_empty());
        assert_eq!(app.mode, Mode::Add);
    }

    #[test]
    fn command_letters_are_text_in_add_mode() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir);
        type_str(&mut app, "q d a");
        assert_eq!(app.add_buffer, "q d a");
        assert!(!app.should_quit);
        assert_eq!(app.mode, Mode::Add);
    }

    #[test]
    fn shifted_chars_are_accepted() {
        let dir = TempDir::new().unwrap();
        let mut app = adding(&dir);
        handle_add(
            &mut app,
            KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT),
        );
        handle_add(
            &mut app,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT),
        );
        assert_eq!(app.add_buffer, "B");
    }

    #[test]
    fn new_todo_goes_to_end_without_moving_selection() {
        let dir = TempDir::new().unwrap();
        let list: TodoList = ["x", "y"].into_iter().map(Todo::new).collect();
        let mut app = app_in(&dir, list);
        app.selected = 1;
        app.mode = Mode::Add;
        type_str(&mut app, "z");
        handle_add(&mut app, press(KeyCode::Enter));
        assert_eq!(app.todos.items[2], Todo::new("z"));
        assert_eq!(app.selected, 1);
    }
}
