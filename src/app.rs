//! Tab Marks Frontend App
//!
//! Tab strip on top, the active tab's topics below, dialogs on demand.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DragSource, DropTarget};
use reactive_stores::Store;
use tab_marks_lib::controller::Action;

use crate::components::{
    AlertModal, ConfirmDialog, ErrorBanner, LogPanel, TabContentView, TabStrip, ITEM_GROUP, TAB_GROUP, TOPIC_GROUP,
};
use crate::context::AppContext;
use crate::store::{render_memo, AppState};

/// Translate a finished drag into a gesture
fn drop_action(source: DragSource, target: DropTarget) -> Option<Action> {
    match source.group {
        TAB_GROUP => Some(Action::DropTab { tab_id: source.id, slot: target.slot }),
        TOPIC_GROUP => Some(Action::DropTopic { topic_id: source.id, slot: target.slot }),
        ITEM_GROUP => Some(Action::DropItem {
            item_id: source.id,
            topic_id: target.list_id?,
            slot: target.slot,
        }),
        _ => None,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let dnd = create_dnd_signals();
    let ctx = AppContext::new(store, dnd);
    provide_context(ctx);

    bind_global_mouseup(dnd, move |source, target| {
        log::debug!("Dropped {:?} on {:?}", source, target);
        if let Some(action) = drop_action(source, target) {
            ctx.dispatch(action);
        }
    });

    ctx.dispatch(Action::Load);

    let view = render_memo(store);

    view! {
        <div class="app-layout">
            <ErrorBanner message=Signal::derive(move || view.with(|v| v.error.clone())) />

            <TabStrip view=view />

            <main class="tab-content">
                <Show when=move || view.with(|v| v.loading)>
                    <div class="loading">"Loading…"</div>
                </Show>
                <TabContentView view=view />
            </main>

            <ConfirmDialog prompt=Signal::derive(move || view.with(|v| v.confirm.clone())) />
            <AlertModal message=Signal::derive(move || view.with(|v| v.alert.clone())) />
            <LogPanel />
        </div>
    }
}
