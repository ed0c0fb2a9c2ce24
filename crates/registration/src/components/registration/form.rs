use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use tui_input::Input;

use super::focus::{Focus, focus_ring};
use crate::{
    core::{Field, RegistrationState},
    style::Theme,
};

/// Everything the form needs to draw itself.
pub struct FormView<'a> {
    pub state: &'a RegistrationState,
    pub inputs: &'a HashMap<Field, Input>,
    pub focus: Focus,
    pub theme: &'a Theme,
}

/// Rows a focus target occupies.
fn row_height(view: &FormView<'_>, target: Focus) -> u16 {
    match target {
        Focus::Field(field) if field.is_checkbox() => 2,
        Focus::Field(field) => 3 + u16::from(view.state.errors.contains(field)),
        Focus::Submit => 1,
    }
}

pub fn render(frame: &mut Frame, area: Rect, view: &FormView<'_>) {
    let targets = focus_ring(&view.state.draft);
    let constraints = targets
        .iter()
        .map(|t| Constraint::Length(row_height(view, *t)))
        .chain(std::iter::once(Constraint::Min(0)));
    let rows = Layout::vertical(constraints).split(area);

    for (target, row) in targets.iter().zip(rows.iter()) {
        match *target {
            Focus::Field(field) if field.is_checkbox() => render_checkbox(frame, *row, view, field),
            Focus::Field(field) => render_text_field(frame, *row, view, field),
            Focus::Submit => render_button(frame, *row, view),
        }
    }
}

fn render_text_field(frame: &mut Frame, area: Rect, view: &FormView<'_>, field: Field) {
    let focused = view.focus == Focus::Field(field);
    let error = view.state.errors.get(field);

    let border_style = if error.is_some() {
        view.theme.border_error
    } else if focused {
        view.theme.border_focused
    } else {
        view.theme.border
    };

    let [box_area, error_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(format!(" {}: ", field.label()), view.theme.label));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let width = inner.width.max(1) as usize;
    let (value, scroll, cursor) = match view.inputs.get(&field) {
        Some(input) => (
            input.value().to_string(),
            input.visual_scroll(width),
            input.visual_cursor(),
        ),
        None => (view.state.draft.text(field).unwrap_or_default().to_string(), 0, 0),
    };
    frame.render_widget(
        Paragraph::new(value).scroll((0, scroll.min(u16::MAX as usize) as u16)),
        inner,
    );

    if focused && inner.width > 0 && inner.height > 0 {
        let col = cursor.saturating_sub(scroll).min(width.saturating_sub(1)) as u16;
        frame.set_cursor_position((inner.x + col, inner.y));
    }

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(message, view.theme.error_text))),
            error_area,
        );
    }
}

fn render_checkbox(frame: &mut Frame, area: Rect, view: &FormView<'_>, field: Field) {
    let focused = view.focus == Focus::Field(field);
    let checked = view.state.draft.attending_with_guest;
    let mark = if checked { "[x]" } else { "[ ]" };
    let mark_style = if focused {
        view.theme.button_focused
    } else {
        view.theme.button
    };
    let line = Line::from(vec![
        Span::styled(field.label(), view.theme.label),
        Span::raw(" "),
        Span::styled(mark, mark_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_button(frame: &mut Frame, area: Rect, view: &FormView<'_>) {
    let style = if view.focus == Focus::Submit {
        view.theme.button_focused
    } else {
        view.theme.button
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("[ Submit ]", style))).centered(),
        area,
    );
}
