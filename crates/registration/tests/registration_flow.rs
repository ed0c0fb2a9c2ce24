use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::{Terminal, backend::TestBackend};
use registration::{
    action::Action,
    components::{Component, registration::RegistrationComponent, status_bar::StatusBar},
    core::{
        Effect, Field, Intent, RegistrationDraft, RegistrationState, ViewState, reduce,
        reducer::reduce_all, validate,
        validation::{
            AGE_NOT_POSITIVE, AGE_REQUIRED, EMAIL_INVALID, EMAIL_REQUIRED, GUEST_NAME_REQUIRED,
            NAME_REQUIRED,
        },
    },
};
use tokio::sync::mpsc;

fn fill(state: &mut RegistrationState, name: &str, email: &str, age: &str) {
    reduce_all(
        state,
        [
            Intent::SetText(Field::Name, name.into()),
            Intent::SetText(Field::Email, email.into()),
            Intent::SetText(Field::Age, age.into()),
        ],
    );
}

#[test]
fn empty_form_reports_every_required_field() {
    let errors = validate(&RegistrationDraft::default());
    let collected: Vec<_> = errors.iter().map(|(f, m)| (f, m.to_string())).collect();
    assert_eq!(
        collected,
        vec![
            (Field::Name, NAME_REQUIRED.to_string()),
            (Field::Email, EMAIL_REQUIRED.to_string()),
            (Field::Age, AGE_REQUIRED.to_string()),
        ]
    );
}

#[test]
fn invalid_submit_stays_in_form_with_messages() {
    let mut state = RegistrationState::new();
    fill(&mut state, "Al", "bad", "0");
    reduce(&mut state, Intent::Submit);

    assert_eq!(state.view, ViewState::Editing);
    assert_eq!(state.errors.get(Field::Email), Some(EMAIL_INVALID));
    assert_eq!(state.errors.get(Field::Age), Some(AGE_NOT_POSITIVE));
    assert_eq!(state.errors.get(Field::Name), None);
}

#[test]
fn guest_name_required_only_when_attending() {
    let mut state = RegistrationState::new();
    fill(&mut state, "Ada", "ada@example.com", "36");
    reduce(&mut state, Intent::SetChecked(Field::AttendingWithGuest, true));
    reduce(&mut state, Intent::Submit);
    assert_eq!(state.errors.get(Field::GuestName), Some(GUEST_NAME_REQUIRED));
    assert!(state.is_editing());

    reduce(&mut state, Intent::SetChecked(Field::AttendingWithGuest, false));
    let effects = reduce(&mut state, Intent::Submit);
    assert!(state.is_submitted());
    assert!(matches!(effects.first(), Some(Effect::Submitted(_))));
}

#[test]
fn full_round_trip_back_to_empty_form() {
    let mut state = RegistrationState::new();
    fill(&mut state, "Ada", "ada@example.com", "36");
    let effects = reduce(&mut state, Intent::Submit);
    assert_eq!(
        effects.last(),
        Some(&Effect::ViewChanged(ViewState::Submitted))
    );

    // no edits behind the summary
    reduce(&mut state, Intent::SetText(Field::Name, "Eve".into()));
    assert_eq!(state.draft.name, "Ada");

    let effects = reduce(&mut state, Intent::Back);
    assert_eq!(effects, vec![Effect::ViewChanged(ViewState::Editing)]);
    assert_eq!(state, RegistrationState::default());
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn screen(form: &mut RegistrationComponent, bar: &mut StatusBar) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            form.draw(f, area).unwrap();
            bar.draw(f, area).unwrap();
        })
        .unwrap();
    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn keyboard_session_reaches_summary_and_status_bar_follows() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut form = RegistrationComponent::new();
    let mut bar = StatusBar::new();
    form.register_action_handler(tx).unwrap();

    let mut keys: Vec<KeyCode> = "Ada".chars().map(KeyCode::Char).collect();
    keys.push(KeyCode::Tab);
    keys.extend("ada@example.com".chars().map(KeyCode::Char));
    keys.push(KeyCode::Tab);
    keys.extend("36".chars().map(KeyCode::Char));
    keys.push(KeyCode::Enter);

    for code in keys {
        if let Some(action) = form.handle_key_event(key(code)).unwrap() {
            form.update(action).unwrap();
        }
    }
    while let Ok(action) = rx.try_recv() {
        bar.update(action).unwrap();
    }

    let text = screen(&mut form, &mut bar);
    assert!(text.contains("Registration Summary"));
    assert!(text.contains("Email: ada@example.com"));
    assert!(text.contains("Age: 36"));
    assert!(text.contains("back"));

    form.update(Action::Back).unwrap();
    assert_eq!(rx.try_recv().ok(), Some(Action::ViewChanged(ViewState::Editing)));
    assert!(form.state().is_editing());
}
