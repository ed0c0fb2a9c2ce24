//! Focus ring of the form: every visible field followed by the submit button.

use crate::core::{Field, RegistrationDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::Name)
    }
}

pub fn focus_ring(draft: &RegistrationDraft) -> Vec<Focus> {
    draft
        .visible_fields()
        .into_iter()
        .map(Focus::Field)
        .chain(std::iter::once(Focus::Submit))
        .collect()
}

pub fn next(draft: &RegistrationDraft, current: Focus) -> Focus {
    let ring = focus_ring(draft);
    let pos = ring.iter().position(|f| *f == current).unwrap_or(0);
    ring[(pos + 1) % ring.len()]
}

pub fn prev(draft: &RegistrationDraft, current: Focus) -> Focus {
    let ring = focus_ring(draft);
    let pos = ring.iter().position(|f| *f == current).unwrap_or(0);
    if pos == 0 {
        ring[ring.len() - 1]
    } else {
        ring[pos - 1]
    }
}
