/*!
Declarative side effects returned by the registration reducer.

The reducer stays pure and only returns `Vec<Effect>`; the UI shell
(`components::registration`) interprets them:

- `Log`         : written through `tracing`
- `Submitted`   : logged as a successful submission, draft serialized as JSON
- `ViewChanged` : forwarded as `Action::ViewChanged` so key bindings and the
                  status bar follow the current view
*/

use std::fmt;

use super::{draft::RegistrationDraft, state::ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Log(String),
    Submitted(RegistrationDraft),
    ViewChanged(ViewState),
}

impl Effect {
    pub fn log<T: Into<String>>(msg: T) -> Self {
        Effect::Log(msg.into())
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Log(msg) => write!(f, "Log({msg})"),
            Effect::Submitted(draft) => write!(f, "Submitted(name={})", draft.name),
            Effect::ViewChanged(view) => write!(f, "ViewChanged({view})"),
        }
    }
}
