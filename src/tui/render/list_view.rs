use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{checkbox, shown};

/// Render the visible slice of the todo list, one row per item
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let lines: Vec<Line> = app
        .todos
        .iter()
        .skip(app.scroll_offset)
        .take(area.height as usize)
        .map(|todo| {
            let text_style = if todo.done {
                Style::default().fg(theme.dim)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(vec![
                Span::styled(checkbox(todo), Style::default().fg(theme.text)),
                Span::styled(shown(&todo.text), text_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
