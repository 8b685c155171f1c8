//! Rename Input Component
//!
//! Inline text input replacing a tab or topic name. Enter or focus loss
//! commits; there is no cancel.

use leptos::html::Input;
use leptos::prelude::*;
use tab_marks_lib::controller::Action;
use tab_marks_lib::tree::input_width_ch;

use crate::context::use_app_context;

#[component]
pub fn RenameInput(initial: String, width_ch: usize) -> impl IntoView {
    let ctx = use_app_context();
    let (value, set_value) = signal(initial);
    let (width, set_width) = signal(width_ch);
    let input_ref = NodeRef::<Input>::new();

    // Focus and select once mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    let commit = move || {
        ctx.dispatch(Action::CommitRename { value: value.get_untracked() });
    };

    view! {
        <input
            node_ref=input_ref
            type="text"
            class="rename-input"
            style=move || format!("width: {}ch", width.get())
            prop:value=move || value.get()
            on:input=move |ev| {
                let text = event_target_value(&ev);
                set_width.set(input_width_ch(&text));
                set_value.set(text);
            }
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    commit();
                }
            }
            on:blur=move |_| commit()
            on:mousedown=|ev| ev.stop_propagation()
            on:click=|ev| ev.stop_propagation()
        />
    }
}
