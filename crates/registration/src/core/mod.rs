//! Core of the registration form.
//!
//! Everything in here is free of terminal / rendering concerns:
//!   * `draft`      : the values the user is typing (`RegistrationDraft`, `Field`)
//!   * `validation` : pure `validate(&draft) -> ErrorSet`
//!   * `state`      : `RegistrationState` (draft + errors + view)
//!   * `intent`     : inputs to the reducer
//!   * `reducer`    : `reduce(&mut state, intent) -> Vec<Effect>`
//!   * `effects`    : declarative side effects interpreted by the UI shell
pub mod draft;
pub mod effects;
pub mod intent;
pub mod reducer;
pub mod state;
pub mod validation;

pub use draft::{Field, FieldKind, RegistrationDraft};
pub use effects::Effect;
pub use intent::Intent;
pub use reducer::reduce;
pub use state::{RegistrationState, ViewState};
pub use validation::{ErrorSet, validate};
