//! Item Form Component
//!
//! Add-item and edit-item form. Field values live here until submit; the
//! controller validates them.

use leptos::prelude::*;
use tab_marks_lib::controller::Action;
use tab_marks_lib::domain::ItemDraft;
use tab_marks_lib::tree::{FormTarget, FormView};

use crate::context::use_app_context;

#[component]
pub fn ItemForm(form: FormView) -> impl IntoView {
    let ctx = use_app_context();
    let FormView { target, initial, .. } = form;

    let (title, set_title) = signal(initial.title);
    let (link, set_link) = signal(initial.link);
    let (fonte, set_fonte) = signal(initial.fonte.unwrap_or_default());
    let (description, set_description) = signal(initial.description.unwrap_or_default());

    let is_edit = matches!(target, FormTarget::EditItem { .. });
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft::new(
            title.get_untracked(),
            link.get_untracked(),
            fonte.get_untracked(),
            description.get_untracked(),
        );
        let action = match &target {
            FormTarget::NewItem { topic_id } => Action::SubmitNewItem { topic_id: topic_id.clone(), draft },
            FormTarget::EditItem { item_id } => Action::SubmitEdit { item_id: item_id.clone(), draft },
        };
        ctx.dispatch(action);
    };

    view! {
        <form
            class=if is_edit { "item-form edit" } else { "item-form" }
            on:submit=on_submit
            on:mousedown=|ev| ev.stop_propagation()
        >
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="url"
                placeholder="Link"
                prop:value=move || link.get()
                on:input=move |ev| set_link.set(event_target_value(&ev))
            />
            <input
                type="url"
                placeholder="Source (optional)"
                prop:value=move || fonte.get()
                on:input=move |ev| set_fonte.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">{if is_edit { "Save" } else { "Add" }}</button>
        </form>
    }
}
