use serde::{Deserialize, Serialize};
use strum::Display;

use crate::core::ViewState;

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    Error(String),
    Help,
    FocusNext,
    FocusPrev,
    /// Validate the form; shows the summary if everything is valid.
    Submit,
    /// Leave the summary and start over.
    Back,
    /// Reported by the registration component after every view transition.
    ViewChanged(ViewState),
}
