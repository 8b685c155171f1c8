//! Application Context
//!
//! Every component reports gestures through `dispatch`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::DndSignals;
use tab_marks_lib::controller::{update, Action};

use crate::commands;
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    pub dnd: DndSignals,
}

impl AppContext {
    pub fn new(store: AppStore, dnd: DndSignals) -> Self {
        Self { store, dnd }
    }

    /// Apply a gesture now; its store work (if any) continues in the background
    pub fn dispatch(&self, action: Action) {
        log::debug!("Dispatch {:?}", action);
        let command = update(&mut self.store.session().write(), action);
        if let Some(command) = command {
            let store = self.store;
            spawn_local(commands::run_command(store, command));
        }
    }

    /// Clicks that end a drag are not gestures
    pub fn drag_just_ended(&self) -> bool {
        self.dnd.drag_just_ended_read.get_untracked()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
