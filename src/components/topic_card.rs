//! Topic Card Component
//!
//! Collapsible header with the topic name, its items and an add-item form.
//! The card is mounted once per topic id and reads its topic from the render
//! memo, so only the parts that changed are redrawn.

use leptos::prelude::*;
use leptos_dragdrop::{
    make_on_mousedown, make_on_mouseleave, make_on_row_mousemove, make_on_zone_mouseenter, DragSource,
    DropTarget,
};
use tab_marks_lib::controller::{Action, DeleteTarget, RenameTarget};
use tab_marks_lib::tree::{Label, RenderTree, TabContent, TopicView};

use crate::components::{DropZone, ItemForm, ItemRow, RenameInput, ITEM_GROUP, TOPIC_GROUP};
use crate::context::use_app_context;

#[component]
pub fn TopicCard(view: Memo<RenderTree>, id: String) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;

    let lookup_id = id.clone();
    let entry: Memo<Option<(usize, TopicView)>> = Memo::new(move |_| {
        view.with(|v| match &v.content {
            TabContent::Topics(topics) => topics
                .iter()
                .enumerate()
                .find(|(_, t)| t.id == lookup_id)
                .map(|(index, t)| (index, t.clone())),
            TabContent::Empty { .. } => None,
        })
    });
    let index = Memo::new(move |_| entry.with(|e| e.as_ref().map_or(0, |(index, _)| *index)));
    let expanded = Memo::new(move |_| entry.with(|e| e.as_ref().is_some_and(|(_, t)| t.expanded)));
    let label = Memo::new(move |_| entry.with(|e| e.as_ref().map(|(_, t)| t.label.clone())));
    let items = Memo::new(move |_| {
        entry.with(|e| e.as_ref().map(|(_, t)| t.items.clone()).unwrap_or_default())
    });
    let add_form = Memo::new(move |_| entry.with(|e| e.as_ref().map(|(_, t)| t.add_form.clone())));
    let item_count = Memo::new(move |_| items.with(Vec::len));

    let on_mousedown = make_on_mousedown(dnd, DragSource { group: TOPIC_GROUP, id: id.clone() });
    let on_mousemove = move |ev: web_sys::MouseEvent| {
        make_on_row_mousemove(dnd, TOPIC_GROUP, None, index.get_untracked())(ev);
    };
    let on_mouseleave = make_on_mouseleave(dnd);
    // Items dragged over a header land at the end of that topic
    let header_list = id.clone();
    let on_header_enter = move |ev: web_sys::MouseEvent| {
        let target = DropTarget {
            group: ITEM_GROUP,
            list_id: Some(header_list.clone()),
            slot: item_count.get_untracked(),
        };
        make_on_zone_mouseenter(dnd, target)(ev);
    };

    let drag_id = id.clone();
    let card_class = move || {
        let index = index.get();
        let mut c = String::from("topic-card");
        if !expanded.get() { c.push_str(" collapsed"); }
        if dnd.is_dragging(TOPIC_GROUP, &drag_id) { c.push_str(" dragging"); }
        if dnd.is_target(TOPIC_GROUP, None, index) { c.push_str(" drop-before"); }
        if dnd.is_target(TOPIC_GROUP, None, index + 1) { c.push_str(" drop-after"); }
        c
    };

    let rename_id = id.clone();
    let name = move || match label.get() {
        Some(Label::Editing { initial, width_ch }) => view! {
            <RenameInput initial=initial width_ch=width_ch />
        }
        .into_any(),
        Some(Label::Text(name)) => {
            let rename_id = rename_id.clone();
            view! {
                <span
                    class="topic-name"
                    title="Double-click to rename"
                    on:dblclick=move |_| {
                        ctx.dispatch(Action::BeginRename(RenameTarget::Topic(rename_id.clone())));
                    }
                >
                    {name}
                </span>
            }
            .into_any()
        }
        None => ().into_any(),
    };

    let toggle_id = id.clone();
    let delete_id = id.clone();
    let body_id = id;
    let body = move || {
        expanded.get().then(|| {
            let list_id = body_id.clone();
            view! {
                <div class="topic-body">
                    <ul class="item-list">
                        <For
                            each={move || items.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(row, item)| (*row, item.clone())
                            children=move |(row, item)| {
                                view! { <ItemRow item=item topic_id=list_id.clone() index=row /> }
                            }
                        />
                    </ul>
                    <DropZone
                        group=ITEM_GROUP
                        list_id=Some(body_id.clone())
                        slot=Signal::derive(move || item_count.get())
                    />
                    // Remounted, and so emptied, only when the form view changes
                    {move || add_form.get().map(|form| view! { <ItemForm form=form /> })}
                </div>
            }
        })
    };

    view! {
        <section
            class=card_class
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseleave=on_mouseleave
        >
            <header class="topic-header" on:mouseenter=on_header_enter>
                <button
                    class="collapse-btn"
                    on:click=move |_| {
                        if !ctx.drag_just_ended() {
                            ctx.dispatch(Action::ToggleTopic(toggle_id.clone()));
                        }
                    }
                >
                    {move || if expanded.get() { "▼" } else { "▶" }}
                </button>
                {name}
                <span class="topic-count">{move || item_count.get()}</span>
                <button
                    class="delete-btn"
                    title="Delete topic"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.dispatch(Action::RequestDelete(DeleteTarget::Topic(delete_id.clone())));
                    }
                >
                    "×"
                </button>
            </header>
            {body}
        </section>
    }
}
