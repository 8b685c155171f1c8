//! Tab Strip Component
//!
//! One button per tab; clicking the active tab renames it.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_mouseleave, make_on_row_mousemove, DragSource};
use tab_marks_lib::controller::{Action, DeleteTarget};
use tab_marks_lib::tree::{Label, RenderTree, TabButton};

use crate::components::{DropZone, RenameInput, TAB_GROUP};
use crate::context::use_app_context;

#[component]
pub fn TabStrip(view: Memo<RenderTree>) -> impl IntoView {
    let ctx = use_app_context();
    let tab_count = move || view.with(|v| v.tabs.len());

    view! {
        <nav class="tab-strip">
            <For
                each=move || view.with(|v| v.tabs.iter().cloned().enumerate().collect::<Vec<_>>())
                // Whole rendered tab as key: any visible change re-renders it
                key=|(index, tab)| (*index, tab.clone())
                children=move |(index, tab)| view! { <TabEntry tab=tab index=index /> }
            />
            <DropZone group=TAB_GROUP list_id=None slot=Signal::derive(tab_count) />
            <button
                class="tab-add-btn"
                title="New tab"
                on:click=move |_| ctx.dispatch(Action::AddTab)
            >
                "+"
            </button>
        </nav>
    }
}

#[component]
fn TabEntry(tab: TabButton, index: usize) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;
    let id = tab.id.clone();

    let source = DragSource { group: TAB_GROUP, id: id.clone() };
    let on_mousedown = make_on_mousedown(dnd, source);
    let on_mousemove = make_on_row_mousemove(dnd, TAB_GROUP, None, index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let drag_id = id.clone();
    let entry_class = move || {
        let mut c = String::from("tab-entry");
        if tab.active { c.push_str(" active"); }
        if dnd.is_dragging(TAB_GROUP, &drag_id) { c.push_str(" dragging"); }
        if dnd.is_target(TAB_GROUP, None, index) { c.push_str(" drop-before"); }
        if dnd.is_target(TAB_GROUP, None, index + 1) { c.push_str(" drop-after"); }
        c
    };

    let label = match tab.label {
        Label::Editing { initial, width_ch } => view! {
            <RenameInput initial=initial width_ch=width_ch />
        }
        .into_any(),
        Label::Text(name) => {
            let click_id = id.clone();
            view! {
                <button
                    class="tab-btn"
                    on:click=move |_| {
                        if !ctx.drag_just_ended() {
                            ctx.dispatch(Action::ClickTab(click_id.clone()));
                        }
                    }
                >
                    {name}
                </button>
            }
            .into_any()
        }
    };

    let delete_id = id.clone();
    view! {
        <div
            class=entry_class
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseleave=on_mouseleave
        >
            {label}
            {tab.deletable.then(|| view! {
                <button
                    class="delete-btn"
                    title="Delete tab"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.dispatch(Action::RequestDelete(DeleteTarget::Tab(delete_id.clone())));
                    }
                >
                    "×"
                </button>
            })}
        </div>
    }
}
