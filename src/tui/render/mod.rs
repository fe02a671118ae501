pub mod helpers;
pub mod list_view;
pub mod prompt;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Position, Rect};

use super::app::{App, Mode};

/// Rows kept free below the list: blank separator, prompt, hint, status.
pub const FOOTER_ROWS: u16 = 4;

/// Number of list rows that fit in `area`.
pub fn list_height(area: Rect) -> usize {
    area.height.saturating_sub(FOOTER_ROWS).max(1) as usize
}

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let height = list_height(area);

    app.clamp_selection();
    app.scroll_into_view(height);

    let visible = app
        .todos
        .len()
        .saturating_sub(app.scroll_offset)
        .min(height) as u16;
    let list_area = Rect {
        height: (height as u16).min(area.height),
        ..area
    };
    list_view::render_list_view(frame, app, list_area);

    // Prompts start one blank row below the last visible item
    let prompt_y = area.y.saturating_add(visible).saturating_add(1);
    let prompt_cursor = match app.mode {
        Mode::Navigate => None,
        Mode::Add => prompt::render_add_prompt(frame, app, area, prompt_y),
        Mode::ConfirmDelete => {
            prompt::render_delete_prompt(frame, app, area, prompt_y);
            None
        }
    };

    status_row::render_status_row(frame, app, area);

    let cursor = prompt_cursor.unwrap_or_else(|| selection_cursor(app, area));
    frame.set_cursor_position(cursor);
}

/// Terminal position inside the selected item's checkbox.
pub fn selection_cursor(app: &App, area: Rect) -> Position {
    let row = app.selected.saturating_sub(app.scroll_offset) as u16;
    clamp_to(area, area.x.saturating_add(1), area.y.saturating_add(row))
}

pub(super) fn clamp_to(area: Rect, x: u16, y: u16) -> Position {
    let max_x = area.right().saturating_sub(1).max(area.x);
    let max_y = area.bottom().saturating_sub(1).max(area.y);
    Position::new(x.min(max_x), y.min(max_y))
}
