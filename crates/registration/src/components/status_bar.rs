use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::{action::Action, core::ViewState, style::Theme};

/// StatusBar component
///
/// Renders the bottom line of the screen:
/// - key hints for the current view
/// - the last error reported through `Action::Error`
///
/// `Action::ViewChanged` switches the hints and clears a stale error,
/// `Action::Help` toggles the less common bindings.
#[derive(Default)]
pub struct StatusBar {
    view: ViewState,
    error: Option<String>,
    help_visible: bool,
    theme: Theme,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn hints(&self) -> Line<'static> {
        let pairs: &[(&str, &str)] = match (self.view, self.help_visible) {
            (_, true) => &[
                ("Ctrl-S", "submit"),
                ("Ctrl-U", "clear field"),
                ("Ctrl-W", "delete word"),
                ("Ctrl-Z", "suspend"),
                ("F1", "close help"),
            ],
            (ViewState::Editing, false) => &[
                ("Tab", "next"),
                ("S-Tab", "prev"),
                ("Space", "toggle"),
                ("Enter", "submit"),
                ("Ctrl-C", "quit"),
                ("F1", "help"),
            ],
            (ViewState::Submitted, false) => &[("Enter/Esc/b", "back"), ("q", "quit")],
        };
        let mut spans = Vec::with_capacity(pairs.len() * 3);
        for (i, (key, desc)) in pairs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed));
            }
            spans.push(Span::styled(*key, self.theme.label));
            spans.push(Span::styled(format!(" {desc}"), self.theme.dimmed));
        }
        Line::from(spans)
    }
}

impl Component for StatusBar {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ViewChanged(view) => {
                self.view = view;
                self.error = None;
            }
            Action::Error(msg) => self.error = Some(msg),
            Action::Help => self.help_visible = !self.help_visible,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if area.height == 0 {
            return Ok(());
        }
        let [_, bar] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let line = match &self.error {
            Some(err) => Line::from(Span::styled(err.clone(), self.theme.error_text)),
            None => self.hints(),
        };
        frame.render_widget(Paragraph::new(line), bar);
        Ok(())
    }
}
