//! Registration state: the draft, its last validation result and which view
//! is showing.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::{draft::RegistrationDraft, validation::ErrorSet};

/// Which view the registration component shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ViewState {
    /// The form, initial state.
    #[default]
    Editing,
    /// The read-only summary after a valid submit.
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationState {
    pub draft: RegistrationDraft,
    pub errors: ErrorSet,
    pub view: ViewState,
}

impl RegistrationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.view == ViewState::Editing
    }

    pub fn is_submitted(&self) -> bool {
        self.view == ViewState::Submitted
    }

    /// Back to the pristine form.
    pub fn reset(&mut self) {
        self.draft = RegistrationDraft::default();
        self.errors.clear();
        self.view = ViewState::Editing;
    }
}
