use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::clamp_to;
use super::helpers::{end_col, shown};

pub const ADD_PROMPT: &str = "add todo > ";
pub const ADD_HINT: &str = "enter to confirm. esc to cancel";
pub const DELETE_PROMPT: &str = "press again to confirm";

/// A one-row rect at `y`, if that row is inside `area`
fn row_rect(area: Rect, y: u16) -> Option<Rect> {
    (y >= area.y && y < area.bottom()).then(|| Rect::new(area.x, y, area.width, 1))
}

/// Render the add prompt and hint. Returns the cursor position at the end of
/// the typed text, or None if the prompt row is off screen.
pub fn render_add_prompt(frame: &mut Frame, app: &App, area: Rect, y: u16) -> Option<Position> {
    let row = row_rect(area, y)?;
    let line = Line::from(vec![
        Span::styled(ADD_PROMPT, Style::default().fg(app.theme.text)),
        Span::styled(shown(&app.add_buffer), Style::default().fg(app.theme.text)),
    ]);
    frame.render_widget(Paragraph::new(line), row);

    if let Some(hint_row) = row_rect(area, y.saturating_add(1)) {
        let hint = Paragraph::new(ADD_HINT).style(Style::default().fg(app.theme.dim));
        frame.render_widget(hint, hint_row);
    }

    let col = end_col(ADD_PROMPT, &app.add_buffer);
    let x = area.x.saturating_add(col.min(u16::MAX as usize) as u16);
    Some(clamp_to(area, x, y))
}

/// Render the delete confirmation prompt. The cursor stays on the selection.
pub fn render_delete_prompt(frame: &mut Frame, app: &App, area: Rect, y: u16) {
    if let Some(row) = row_rect(area, y) {
        let prompt = Paragraph::new(DELETE_PROMPT).style(Style::default().fg(app.theme.text));
        frame.render_widget(prompt, row);
    }
}
