//! Item Row Component
//!
//! Title, main link, optional source link, description on hover.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_mouseleave, make_on_row_mousemove, DragSource};
use tab_marks_lib::controller::{Action, DeleteTarget};
use tab_marks_lib::tree::ItemView;

use crate::components::{ItemForm, ITEM_GROUP};
use crate::context::use_app_context;

#[component]
pub fn ItemRow(item: ItemView, topic_id: String, index: usize) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = ctx.dnd;
    let ItemView { id, title, link, tooltip, source, edit_form } = item;

    let on_mousedown = make_on_mousedown(dnd, DragSource { group: ITEM_GROUP, id: id.clone() });
    let on_mousemove = make_on_row_mousemove(dnd, ITEM_GROUP, Some(topic_id.clone()), index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let drag_id = id.clone();
    let row_class = move || {
        let mut c = String::from("item-row");
        if dnd.is_dragging(ITEM_GROUP, &drag_id) { c.push_str(" dragging"); }
        if dnd.is_target(ITEM_GROUP, Some(topic_id.as_str()), index) { c.push_str(" drop-before"); }
        if dnd.is_target(ITEM_GROUP, Some(topic_id.as_str()), index + 1) { c.push_str(" drop-after"); }
        c
    };

    let edit_id = id.clone();
    let delete_id = id.clone();
    view! {
        <li
            class=row_class
            title=tooltip
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseleave=on_mouseleave
        >
            <div class="item-main">
                <span class="item-title">{title}</span>
                <a class="item-link" href=link.href target="_blank" rel="noopener noreferrer">
                    {link.text}
                </a>
                {source.map(|source| view! {
                    <a class="item-source" href=source.href target="_blank" rel="noopener noreferrer">
                        {source.text}
                    </a>
                })}
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |_| ctx.dispatch(Action::ToggleEditForm(edit_id.clone()))
                >
                    "✎"
                </button>
                <button
                    class="delete-btn"
                    title="Delete item"
                    on:click=move |_| {
                        ctx.dispatch(Action::RequestDelete(DeleteTarget::Item(delete_id.clone())));
                    }
                >
                    "×"
                </button>
            </div>
            {edit_form.map(|form| view! { <ItemForm form=form /> })}
        </li>
    }
}
