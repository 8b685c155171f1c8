//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the whole session sits behind one field so
//! every reducer step notifies once.

use leptos::prelude::*;
use reactive_stores::Store;
use tab_marks_lib::controller::Session;
use tab_marks_lib::tree::RenderTree;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub session: Session,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Render instructions for the current session, recomputed on change
pub fn render_memo(store: AppStore) -> Memo<RenderTree> {
    Memo::new(move |_| store.session().with(|session| session.render()))
}
