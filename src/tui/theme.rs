use ratatui::style::Color;

/// Fixed color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub text: Color,
    /// Done items and prompt hints
    pub dim: Color,
    /// Status row errors
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text: Color::Reset,
            dim: Color::DarkGray,
            error: Color::Red,
        }
    }
}
