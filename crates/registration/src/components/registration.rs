use std::collections::HashMap;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::Paragraph,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};
use tui_input::{Input, InputRequest};

use super::Component;
use crate::{
    action::Action,
    core::{Effect, Field, Intent, RegistrationState, ViewState, reduce},
    style::Theme,
};

mod focus;
mod form;
mod summary;

pub use focus::Focus;

const FORM_WIDTH: u16 = 64;

/// The registration form and its summary view.
///
/// Owns the `RegistrationState` and feeds every edit, submit and back
/// through the core reducer; effects coming back are logged or forwarded
/// as actions.
pub struct RegistrationComponent {
    tx: Option<UnboundedSender<Action>>,
    state: RegistrationState,
    focus: Focus,
    inputs: HashMap<Field, Input>,
    theme: Theme,
}

impl Default for RegistrationComponent {
    fn default() -> Self {
        Self {
            tx: None,
            state: RegistrationState::new(),
            focus: Focus::default(),
            inputs: Self::empty_inputs(),
            theme: Theme::default(),
        }
    }
}

impl RegistrationComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    fn empty_inputs() -> HashMap<Field, Input> {
        Field::all()
            .filter(|f| !f.is_checkbox())
            .map(|f| (f, Input::default()))
            .collect()
    }

    fn dispatch(&mut self, intent: Intent) -> Result<()> {
        let effects = reduce(&mut self.state, intent);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> Result<()> {
        for effect in effects {
            debug!(%effect, "reducer effect");
            match effect {
                Effect::Log(_) => {}
                Effect::Submitted(draft) => match serde_json::to_string(&draft) {
                    Ok(json) => info!(draft = %json, "Form submitted successfully"),
                    Err(err) => warn!("Form submitted, draft not serializable: {err}"),
                },
                Effect::ViewChanged(view) => {
                    if view == ViewState::Editing {
                        self.inputs = Self::empty_inputs();
                        self.focus = Focus::default();
                    }
                    if let Some(tx) = &self.tx {
                        tx.send(Action::ViewChanged(view))?;
                    }
                }
            }
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        self.dispatch(Intent::Submit)?;
        // Wie im Browser: Fokus springt auf das erste ungültige Feld
        if let Some(first) = self.state.errors.fields().next() {
            if self.state.is_editing() {
                self.focus = Focus::Field(first);
            }
        }
        Ok(())
    }

    fn focus_next(&mut self) {
        self.focus = focus::next(&self.state.draft, self.focus);
    }

    fn focus_prev(&mut self) {
        self.focus = focus::prev(&self.state.draft, self.focus);
    }

    fn focused_text_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Field(field) if !field.is_checkbox() => Some(field),
            _ => None,
        }
    }

    fn set_guest(&mut self, checked: bool) -> Result<()> {
        self.dispatch(Intent::SetChecked(Field::AttendingWithGuest, checked))
    }

    /// Apply an editing request to the field's input and push the new raw
    /// value into the draft.
    fn edit(&mut self, field: Field, request: InputRequest) -> Result<()> {
        let Some(input) = self.inputs.get_mut(&field) else {
            return Ok(());
        };
        if input.handle(request).is_none() {
            return Ok(());
        }
        let value = input.value().to_string();
        self.dispatch(Intent::SetText(field, value))
    }

    fn insert_char(&mut self, field: Field, c: char) -> Result<()> {
        if !accepts_char(field, c) {
            return Ok(());
        }
        self.edit(field, InputRequest::InsertChar(c))
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                return Ok(None);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                return Ok(None);
            }
            KeyCode::Enter => return Ok(Some(Action::Submit)),
            _ => {}
        }

        match self.focus {
            Focus::Submit => match key.code {
                KeyCode::Char(' ') => Ok(Some(Action::Submit)),
                _ => Ok(None),
            },
            Focus::Field(field) if field.is_checkbox() => {
                match key.code {
                    KeyCode::Char(' ') => {
                        let checked = self.state.draft.attending_with_guest;
                        self.set_guest(!checked)?;
                    }
                    KeyCode::Right => self.set_guest(true)?,
                    KeyCode::Left => self.set_guest(false)?,
                    _ => {}
                }
                Ok(None)
            }
            Focus::Field(field) => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Char('u') if ctrl => self.edit(field, InputRequest::DeleteLine)?,
                    KeyCode::Char('w') if ctrl => self.edit(field, InputRequest::DeletePrevWord)?,
                    KeyCode::Char(c)
                        if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) =>
                    {
                        self.insert_char(field, c)?
                    }
                    KeyCode::Backspace => self.edit(field, InputRequest::DeletePrevChar)?,
                    KeyCode::Delete => self.edit(field, InputRequest::DeleteNextChar)?,
                    KeyCode::Left => self.edit(field, InputRequest::GoToPrevChar)?,
                    KeyCode::Right => self.edit(field, InputRequest::GoToNextChar)?,
                    KeyCode::Home => self.edit(field, InputRequest::GoToStart)?,
                    KeyCode::End => self.edit(field, InputRequest::GoToEnd)?,
                    _ => {}
                }
                Ok(None)
            }
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('b') => {
                Ok(Some(Action::Back))
            }
            _ => Ok(None),
        }
    }
}

/// The age input behaves like a number input and drops everything that
/// cannot be part of a number.
fn accepts_char(field: Field, c: char) -> bool {
    match field {
        Field::Age => c.is_ascii_digit() || c == '.' || c == '-',
        _ => !c.is_control(),
    }
}

impl Component for RegistrationComponent {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.tx = Some(tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.state.view {
            ViewState::Editing => self.handle_editing_key(key),
            ViewState::Submitted => self.handle_summary_key(key),
        }
    }

    fn handle_paste(&mut self, text: String) -> Result<Option<Action>> {
        if !self.state.is_editing() {
            return Ok(None);
        }
        if let Some(field) = self.focused_text_field() {
            for c in text.chars() {
                self.insert_char(field, c)?;
            }
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Submit => self.submit()?,
            Action::Back => self.dispatch(Intent::Back)?,
            Action::FocusNext if self.state.is_editing() => self.focus_next(),
            Action::FocusPrev if self.state.is_editing() => self.focus_prev(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Letzte Zeile gehört der StatusBar
        let [header, body, _footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new("Event Registration Form")
                .style(self.theme.title)
                .centered(),
            header,
        );

        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(FORM_WIDTH.min(body.width)),
            Constraint::Fill(1),
        ])
        .areas(body);

        match self.state.view {
            ViewState::Editing => form::render(
                frame,
                column,
                &form::FormView {
                    state: &self.state,
                    inputs: &self.inputs,
                    focus: self.focus,
                    theme: &self.theme,
                },
            ),
            ViewState::Submitted => summary::render(frame, column, &self.state.draft, &self.theme),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{AGE_NOT_POSITIVE, EMAIL_INVALID, NAME_REQUIRED};
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(c: &mut RegistrationComponent, text: &str) {
        for ch in text.chars() {
            c.handle_key_event(key(KeyCode::Char(ch))).unwrap();
        }
    }

    /// Feed a key and run the returned action back through `update`,
    /// like the app loop does.
    fn press(c: &mut RegistrationComponent, code: KeyCode) {
        if let Some(action) = c.handle_key_event(key(code)).unwrap() {
            c.update(action).unwrap();
        }
    }

    fn fill_valid(c: &mut RegistrationComponent) {
        type_text(c, "Ada");
        press(c, KeyCode::Tab);
        type_text(c, "ada@example.com");
        press(c, KeyCode::Tab);
        type_text(c, "36");
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(c: &mut RegistrationComponent) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 32)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                c.draw(f, area).unwrap();
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn typing_updates_draft() {
        let mut c = RegistrationComponent::new();
        fill_valid(&mut c);
        assert_eq!(c.state().draft.name, "Ada");
        assert_eq!(c.state().draft.email, "ada@example.com");
        assert_eq!(c.state().draft.age, "36");
    }

    #[test]
    fn backspace_and_cursor_moves_edit_in_place() {
        let mut c = RegistrationComponent::new();
        type_text(&mut c, "Adx");
        press(&mut c, KeyCode::Backspace);
        type_text(&mut c, "a");
        press(&mut c, KeyCode::Home);
        type_text(&mut c, ">");
        assert_eq!(c.state().draft.name, ">Ada");
    }

    #[test]
    fn age_input_drops_non_numeric_chars() {
        let mut c = RegistrationComponent::new();
        press(&mut c, KeyCode::Tab);
        press(&mut c, KeyCode::Tab);
        assert_eq!(c.focus(), Focus::Field(Field::Age));
        type_text(&mut c, "4a2");
        assert_eq!(c.state().draft.age, "42");
    }

    #[test]
    fn space_toggles_guest_and_reveals_guest_field() {
        let mut c = RegistrationComponent::new();
        for _ in 0..3 {
            press(&mut c, KeyCode::Tab);
        }
        assert_eq!(c.focus(), Focus::Field(Field::AttendingWithGuest));
        press(&mut c, KeyCode::Char(' '));
        assert!(c.state().draft.attending_with_guest);

        press(&mut c, KeyCode::Tab);
        assert_eq!(c.focus(), Focus::Field(Field::GuestName));
        type_text(&mut c, "Bob");
        assert_eq!(c.state().draft.guest_name, "Bob");
    }

    #[test]
    fn failed_submit_focuses_first_invalid_field() {
        let mut c = RegistrationComponent::new();
        type_text(&mut c, "Al");
        press(&mut c, KeyCode::Tab);
        type_text(&mut c, "bad");
        press(&mut c, KeyCode::Tab);
        type_text(&mut c, "0");
        press(&mut c, KeyCode::Enter);

        assert!(c.state().is_editing());
        assert_eq!(c.focus(), Focus::Field(Field::Email));

        let screen = render(&mut c);
        assert!(screen.contains(EMAIL_INVALID));
        assert!(screen.contains(AGE_NOT_POSITIVE));
        assert!(!screen.contains(NAME_REQUIRED));
    }

    #[test]
    fn valid_submit_shows_summary_and_reports_view() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut c = RegistrationComponent::new();
        c.register_action_handler(tx).unwrap();
        fill_valid(&mut c);
        press(&mut c, KeyCode::Enter);

        assert!(c.state().is_submitted());
        assert_eq!(rx.try_recv().ok(), Some(Action::ViewChanged(ViewState::Submitted)));

        let screen = render(&mut c);
        assert!(screen.contains("Registration Summary"));
        assert!(screen.contains("Name: Ada"));
        assert!(screen.contains("Attending with guest: No"));
        assert!(!screen.contains("Guest Name:"));
    }

    #[test]
    fn summary_lists_guest_when_attending() {
        let mut c = RegistrationComponent::new();
        fill_valid(&mut c);
        press(&mut c, KeyCode::Tab);
        press(&mut c, KeyCode::Char(' '));
        press(&mut c, KeyCode::Tab);
        type_text(&mut c, "Bob");
        press(&mut c, KeyCode::Enter);

        let screen = render(&mut c);
        assert!(screen.contains("Attending with guest: Yes"));
        assert!(screen.contains("Guest Name: Bob"));
    }

    #[test]
    fn back_from_summary_clears_form() {
        let mut c = RegistrationComponent::new();
        fill_valid(&mut c);
        press(&mut c, KeyCode::Enter);
        assert!(c.state().is_submitted());

        press(&mut c, KeyCode::Esc);
        assert_eq!(c.state(), &RegistrationState::default());
        assert_eq!(c.focus(), Focus::Field(Field::Name));

        let screen = render(&mut c);
        assert!(screen.contains("Event Registration Form"));
        assert!(!screen.contains("Ada"));
    }

    #[test]
    fn guest_field_hidden_until_checked() {
        let mut c = RegistrationComponent::new();
        let screen = render(&mut c);
        assert!(screen.contains("Are you attending with a guest? [ ]"));
        assert!(!screen.contains("Guest Name"));

        c.set_guest(true).unwrap();
        let screen = render(&mut c);
        assert!(screen.contains("Are you attending with a guest? [x]"));
        assert!(screen.contains("Guest Name"));
    }

    #[test]
    fn paste_goes_into_focused_field() {
        let mut c = RegistrationComponent::new();
        press(&mut c, KeyCode::Tab);
        c.handle_paste("ada@example.com".into()).unwrap();
        assert_eq!(c.state().draft.email, "ada@example.com");
    }
}
