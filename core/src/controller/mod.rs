//! Interaction Controller
//!
//! Every user gesture becomes an [`Action`]. `update` applies it to the
//! [`Session`] and may ask for one store [`Command`]; `execute` performs it
//! and yields a [`Completion`]; `complete` folds that result into whatever
//! the session has become in the meantime.

mod state;
mod actions;
mod reducer;
mod effects;


pub use state::{DeleteTarget, RenameTarget, Session, UiState};
pub use actions::{Action, Command, Completion};
pub use reducer::{complete, fail, update, DEFAULT_TAB_NAME, DEFAULT_TOPIC_NAME, REQUIRED_FIELDS_ALERT};
pub use effects::{execute, run};
