use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::{core::RegistrationDraft, style::Theme};

pub fn summary_lines<'a>(draft: &'a RegistrationDraft, theme: &Theme) -> Vec<Line<'a>> {
    let row = |label: &'static str, value: &'a str| {
        Line::from(vec![
            Span::styled(format!("{label}: "), theme.label),
            Span::raw(value),
        ])
    };

    let mut lines = vec![
        row("Name", &draft.name),
        row("Email", &draft.email),
        row("Age", &draft.age),
        row(
            "Attending with guest",
            if draft.attending_with_guest { "Yes" } else { "No" },
        ),
    ];
    if draft.attending_with_guest {
        lines.push(row("Guest Name", &draft.guest_name));
    }
    lines
}

pub fn render(frame: &mut Frame, area: Rect, draft: &RegistrationDraft, theme: &Theme) {
    let lines = summary_lines(draft, theme);
    let height = lines.len() as u16 + 2;

    let [card, _, button] = Layout::vertical([
        Constraint::Length(height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.success)
        .title(Span::styled(" Registration Summary ", theme.title));
    frame.render_widget(Paragraph::new(lines).block(block), card);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("[ Back ]", theme.button_focused))).centered(),
        button,
    );
}
