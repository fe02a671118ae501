use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

use crate::ops::todo_ops;
use crate::tui::app::{App, Mode};

/// The key after `d`: a second `d` deletes the selected todo, anything else cancels.
/// A cancelled delete writes nothing.
pub(super) fn handle_confirm_delete(app: &mut App, key: KeyEvent) {
    app.mode = Mode::Navigate;
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(removed) = todo_ops::delete_todo(&mut app.todos, app.selected) {
                debug!("deleted {:?}", removed.text);
                app.clamp_selection();
                app.save();
            }
        }
        _ => {
            debug!("delete cancelled");
        }
    }
}
