use crate::model::{Todo, TodoList};

/// Append a new, not-done todo to the end of the list.
/// Empty text is rejected; returns whether anything was appended.
pub fn add_todo(list: &mut TodoList, text: String) -> bool {
    if text.is_empty() {
        return false;
    }
    list.items.push(Todo::new(text));
    true
}

/// Flip the done flag of the todo at `index`. Returns the new flag,
/// or None if the index is out of range.
pub fn toggle_todo(list: &mut TodoList, index: usize) -> Option<bool> {
    let todo = list.items.get_mut(index)?;
    todo.done = !todo.done;
    Some(todo.done)
}

/// Remove and return the todo at `index`.
pub fn delete_todo(list: &mut TodoList, index: usize) -> Option<Todo> {
    if index >= list.items.len() {
        return None;
    }
    Some(list.items.remove(index))
}

/// Clamp a selection index into `[0, len-1]`; 0 for an empty list.
pub fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 { 0 } else { selected.min(len - 1) }
}

/// Next index, wrapping past the end.
pub fn select_next(selected: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (selected + 1) % len
}

/// Previous index, wrapping past the start.
pub fn select_prev(selected: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (selected + len - 1) % len
}
