//! Validation rules for the registration draft.
//!
//! All rules run independently; every violation is collected.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::draft::{Field, RegistrationDraft};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email address is invalid";
pub const AGE_REQUIRED: &str = "Age is required";
pub const AGE_NOT_POSITIVE: &str = "Age must be greater than 0";
pub const GUEST_NAME_REQUIRED: &str = "Guest Name is required";

lazy_static! {
    // Unanchored: "x y@b.c" is accepted because "y@b.c" matches.
    static ref EMAIL_PATTERN: Regex = Regex::new(r"\S+@\S+\.\S+").expect("valid email regex");
}

/// Per-field validation messages. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorSet(BTreeMap<Field, String>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|s| s.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(Field, String)> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Validate a draft and return every violated rule.
pub fn validate(draft: &RegistrationDraft) -> ErrorSet {
    let mut errors = ErrorSet::new();

    if draft.name.is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if draft.email.is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&draft.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if draft.age.is_empty() {
        errors.insert(Field::Age, AGE_REQUIRED);
    } else if !is_positive_number(&draft.age) {
        errors.insert(Field::Age, AGE_NOT_POSITIVE);
    }

    if draft.attending_with_guest && draft.guest_name.is_empty() {
        errors.insert(Field::GuestName, GUEST_NAME_REQUIRED);
    }

    errors
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Whitespace-only input counts as 0; unparsable input is never positive.
/// `inf`/`infinity` parse as `f64` but are not numbers a form accepts.
pub fn is_positive_number(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    match trimmed.parse::<f64>() {
        Ok(n) => n.is_finite() && n > 0.0,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            age: "36".into(),
            attending_with_guest: false,
            guest_name: String::new(),
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn empty_draft_reports_required_fields() {
        let errors = validate(&RegistrationDraft::default());
        let collected: Vec<(Field, &str)> = errors.iter().collect();
        assert_eq!(
            collected,
            vec![
                (Field::Name, NAME_REQUIRED),
                (Field::Email, EMAIL_REQUIRED),
                (Field::Age, AGE_REQUIRED),
            ]
        );
    }

    #[test]
    fn only_missing_name() {
        let draft = RegistrationDraft {
            name: String::new(),
            email: "a@b.com".into(),
            age: "5".into(),
            ..Default::default()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn email_age_and_guest_errors_collected_together() {
        let draft = RegistrationDraft {
            name: "Al".into(),
            email: "bad".into(),
            age: "0".into(),
            attending_with_guest: true,
            guest_name: String::new(),
        };
        let errors = validate(&draft);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![Field::Email, Field::Age, Field::GuestName]
        );
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(Field::Age), Some(AGE_NOT_POSITIVE));
        assert_eq!(errors.get(Field::GuestName), Some(GUEST_NAME_REQUIRED));
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("x y@b.c"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a @ b . c"));
    }

    #[test]
    fn age_must_be_positive() {
        assert!(is_positive_number("1"));
        assert!(is_positive_number("0.5"));
        assert!(is_positive_number(" 42 "));
        assert!(!is_positive_number("0"));
        assert!(!is_positive_number("-3"));
        assert!(!is_positive_number("   "));
        assert!(!is_positive_number("abc"));
        assert!(!is_positive_number("inf"));
        assert!(!is_positive_number("Infinity"));
        assert!(!is_positive_number("-INF"));
        assert!(!is_positive_number("NaN"));
        assert!(!is_positive_number("1e400"));
    }

    #[test]
    fn infinite_age_is_rejected() {
        for age in ["inf", "Infinity"] {
            let draft = RegistrationDraft {
                age: age.into(),
                ..valid_draft()
            };
            assert_eq!(validate(&draft).get(Field::Age), Some(AGE_NOT_POSITIVE));
        }
    }

    #[test]
    fn whitespace_age_is_present_but_not_positive() {
        let draft = RegistrationDraft {
            age: " ".into(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft).get(Field::Age), Some(AGE_NOT_POSITIVE));
    }

    #[test]
    fn whitespace_name_counts_as_present() {
        let draft = RegistrationDraft {
            name: " ".into(),
            ..valid_draft()
        };
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn guest_name_ignored_without_guest() {
        let draft = RegistrationDraft {
            attending_with_guest: false,
            guest_name: String::new(),
            ..valid_draft()
        };
        assert!(!validate(&draft).contains(Field::GuestName));

        let with_guest = RegistrationDraft {
            attending_with_guest: true,
            guest_name: "Bob".into(),
            ..valid_draft()
        };
        assert!(validate(&with_guest).is_empty());
    }
}
