//! Store command runner
//!
//! Executes controller commands against the Realtime Database and folds
//! each completion into the latest session.

use leptos::prelude::*;
use tab_marks_lib::controller::{complete, execute, fail, Command};
use tab_marks_lib::repository::RtdbStore;

use crate::config;
use crate::store::{AppStateStoreFields, AppStore};

thread_local! {
    static CLIENT: RtdbStore = RtdbStore::new(config::store_config());
}

/// Shared REST client
pub fn client() -> RtdbStore {
    CLIENT.with(RtdbStore::clone)
}

/// Run a command and every follow-up it produces
pub async fn run_command(store: AppStore, command: Command) {
    let client = client();
    let mut next = Some(command);
    while let Some(command) = next.take() {
        match execute(&client, command).await {
            Ok(completion) => {
                next = complete(&mut store.session().write(), completion);
            }
            Err(e) => {
                fail(&mut store.session().write(), &e);
                return;
            }
        }
    }
}
