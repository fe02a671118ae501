use crate::model::Todo;
use crate::util::unicode;

/// Checkbox prefix for a todo, markdown style
pub(super) fn checkbox(todo: &Todo) -> String {
    format!("[{}]", todo.checkbox_char())
}

/// User text as it is drawn: control characters spelled out, never raw
pub(super) fn shown(text: &str) -> String {
    unicode::visible_text(text)
}

/// Column just past `prefix` followed by `text` as drawn, in terminal cells
pub(super) fn end_col(prefix: &str, text: &str) -> usize {
    unicode::display_width(prefix) + unicode::display_width(&shown(text))
}
