//! Draft values of the registration form.
//!
//! `RegistrationDraft` is mutated field by field while the user types and
//! reset to its defaults when the user goes back from the summary.
//! Text-like fields keep the raw input (including `age`, which is only
//! interpreted as a number during validation).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Input widget type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Checkbox,
}

/// The attributes of a `RegistrationDraft`, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Age,
    AttendingWithGuest,
    GuestName,
}

impl Field {
    pub fn kind(self) -> FieldKind {
        match self {
            Field::Name | Field::GuestName => FieldKind::Text,
            Field::Email => FieldKind::Email,
            Field::Age => FieldKind::Number,
            Field::AttendingWithGuest => FieldKind::Checkbox,
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Age => "Age",
            Field::AttendingWithGuest => "Are you attending with a guest?",
            Field::GuestName => "Guest Name",
        }
    }

    pub fn is_checkbox(self) -> bool {
        self.kind() == FieldKind::Checkbox
    }

    /// All fields in display order.
    pub fn all() -> impl Iterator<Item = Field> {
        Field::iter()
    }
}

/// Rejected field update (wrong value kind for the field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindMismatch {
    pub field: Field,
    pub expected: FieldKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub age: String,
    pub attending_with_guest: bool,
    pub guest_name: String,
}

impl RegistrationDraft {
    /// Raw text of a text-like field, `None` for the checkbox.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Age => Some(&self.age),
            Field::GuestName => Some(&self.guest_name),
            Field::AttendingWithGuest => None,
        }
    }

    /// Store the raw string for a text-like field.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> Result<(), KindMismatch> {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Age => &mut self.age,
            Field::GuestName => &mut self.guest_name,
            Field::AttendingWithGuest => {
                return Err(KindMismatch {
                    field,
                    expected: FieldKind::Checkbox,
                });
            }
        };
        *slot = value.into();
        Ok(())
    }

    /// Store the boolean for a checkbox field.
    pub fn set_checked(&mut self, field: Field, checked: bool) -> Result<(), KindMismatch> {
        match field {
            Field::AttendingWithGuest => {
                self.attending_with_guest = checked;
                Ok(())
            }
            other => Err(KindMismatch {
                field: other,
                expected: other.kind(),
            }),
        }
    }

    /// Whether the field is part of the form right now.
    /// Guest Name only shows up while attending with a guest.
    pub fn is_visible(&self, field: Field) -> bool {
        match field {
            Field::GuestName => self.attending_with_guest,
            _ => true,
        }
    }

    pub fn visible_fields(&self) -> Vec<Field> {
        Field::all().filter(|f| self.is_visible(*f)).collect()
    }
}
