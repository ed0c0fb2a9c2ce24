//! Registration reducer.
//!
//! Policy:
//!   - Must be side-effect free; everything observable leaves as an `Effect`.
//!   - Never panics; intents that do not apply in the current view are
//!     ignored (edits and submits while Submitted, Back while Editing).
//!   - Field edits do not touch `errors`; messages stay until the next submit.

use super::{
    draft::FieldKind,
    effects::Effect,
    intent::Intent,
    state::{RegistrationState, ViewState},
    validation::validate,
};

pub fn reduce(state: &mut RegistrationState, intent: Intent) -> Vec<Effect> {
    match intent {
        Intent::SetText(field, value) => {
            if !state.is_editing() {
                return vec![Effect::log(format!("ignored edit of {field} outside the form"))];
            }
            match state.draft.set_text(field, value) {
                Ok(()) => Vec::new(),
                Err(mismatch) => vec![Effect::log(format!(
                    "ignored text for {} field {field}",
                    kind_name(mismatch.expected)
                ))],
            }
        }
        Intent::SetChecked(field, checked) => {
            if !state.is_editing() {
                return vec![Effect::log(format!("ignored edit of {field} outside the form"))];
            }
            match state.draft.set_checked(field, checked) {
                Ok(()) => Vec::new(),
                Err(mismatch) => vec![Effect::log(format!(
                    "ignored checkbox value for {} field {field}",
                    kind_name(mismatch.expected)
                ))],
            }
        }
        Intent::Submit => {
            if !state.is_editing() {
                return Vec::new();
            }
            state.errors = validate(&state.draft);
            if state.errors.is_empty() {
                state.view = ViewState::Submitted;
                vec![
                    Effect::Submitted(state.draft.clone()),
                    Effect::ViewChanged(ViewState::Submitted),
                ]
            } else {
                vec![Effect::log(format!(
                    "submit rejected, {} invalid field(s)",
                    state.errors.len()
                ))]
            }
        }
        Intent::Back => {
            if !state.is_submitted() {
                return Vec::new();
            }
            state.reset();
            vec![Effect::ViewChanged(ViewState::Editing)]
        }
    }
}

fn kind_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Email => "email",
        FieldKind::Number => "number",
        FieldKind::Checkbox => "checkbox",
    }
}

/// Apply `intents` in order and collect every effect they produce.
pub fn reduce_all(
    state: &mut RegistrationState,
    intents: impl IntoIterator<Item = Intent>,
) -> Vec<Effect> {
    intents
        .into_iter()
        .flat_map(|intent| reduce(state, intent))
        .collect()
}
