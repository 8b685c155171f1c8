//! Drop Zone Component
//!
//! A strip at the end of a list, so rows can land after the last one or in
//! an empty list.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_zone_mouseenter, DropTarget};

use crate::context::use_app_context;

#[component]
pub fn DropZone(
    group: &'static str,
    list_id: Option<String>,
    #[prop(into)] slot: Signal<usize>,
) -> impl IntoView {
    let dnd = use_app_context().dnd;
    let on_mouseleave = make_on_mouseleave(dnd);

    let enter_list = list_id.clone();
    let on_mouseenter = move |ev: web_sys::MouseEvent| {
        let target = DropTarget {
            group,
            list_id: enter_list.clone(),
            slot: slot.get_untracked(),
        };
        make_on_zone_mouseenter(dnd, target)(ev);
    };

    // Only show while a row of this group is being dragged
    let zone_class = move || {
        let mut c = String::from("drop-zone");
        let dragging = dnd.dragging_read.with(|d| matches!(d, Some(s) if s.group == group));
        if !dragging { c.push_str(" hidden"); }
        if dnd.is_target(group, list_id.as_deref(), slot.get()) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
