use ratatui::style::{Color, Modifier, Style};

/// Colors shared by the form, the summary and the status bar.
#[derive(Clone, Debug)]
pub struct Theme {
    pub title: Style,
    pub label: Style,
    pub border: Style,
    pub border_focused: Style,
    pub border_error: Style,
    pub error_text: Style,
    pub dimmed: Style,
    pub button: Style,
    pub button_focused: Style,
    pub success: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Rgb(255, 255, 255))
                .add_modifier(Modifier::BOLD),
            label: Style::default().add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Rgb(100, 100, 100)),
            border_focused: Style::default().fg(Color::Rgb(140, 145, 160)),
            border_error: Style::default().fg(Color::Red),
            error_text: Style::default().fg(Color::Red),
            dimmed: Style::default().fg(Color::DarkGray),
            button: Style::default().fg(Color::Gray),
            button_focused: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(100, 255, 100))
                .add_modifier(Modifier::BOLD),
            success: Style::default().fg(Color::Rgb(100, 255, 100)),
        }
    }
}
