use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the status message (if any) on the bottom row of `area`
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let Some(msg) = &app.status_message else {
        return;
    };
    if area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    let paragraph = Paragraph::new(msg.as_str()).style(Style::default().fg(app.theme.error));
    frame.render_widget(paragraph, row);
}
