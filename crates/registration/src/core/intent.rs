//! Inputs of the registration reducer.

use super::draft::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Raw text typed into a text, email or number field.
    SetText(Field, String),
    /// Checkbox toggled.
    SetChecked(Field, bool),
    /// Validate and, if valid, show the summary.
    Submit,
    /// Leave the summary and start over with an empty form.
    Back,
}
