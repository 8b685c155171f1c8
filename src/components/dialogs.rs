//! Dialog Components
//!
//! Delete confirmation, validation alert and the store error banner.

use leptos::prelude::*;
use tab_marks_lib::controller::Action;

use crate::context::use_app_context;

/// Modal asking before a delete; ✓ deletes, ✗ dismisses
#[component]
pub fn ConfirmDialog(prompt: Signal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();

    move || {
        prompt.get().map(|text| view! {
            <div class="modal-backdrop">
                <div class="modal" role="dialog">
                    <p class="modal-text">{text}</p>
                    <div class="modal-actions">
                        <button
                            class="confirm-btn"
                            on:click=move |_| ctx.dispatch(Action::ConfirmDelete)
                        >
                            "✓ Delete"
                        </button>
                        <button
                            class="cancel-btn"
                            on:click=move |_| ctx.dispatch(Action::CancelDelete)
                        >
                            "✗ Cancel"
                        </button>
                    </div>
                </div>
            </div>
        })
    }
}

/// Blocking message for rejected input
#[component]
pub fn AlertModal(message: Signal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();

    move || {
        message.get().map(|text| view! {
            <div class="modal-backdrop">
                <div class="modal" role="alertdialog">
                    <p class="modal-text">{text}</p>
                    <div class="modal-actions">
                        <button on:click=move |_| ctx.dispatch(Action::DismissAlert)>"OK"</button>
                    </div>
                </div>
            </div>
        })
    }
}

#[component]
pub fn ErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();

    move || {
        message.get().map(|text| view! {
            <div class="error-banner" role="status">
                <span>{text}</span>
                <button
                    class="cancel-btn"
                    on:click=move |_| ctx.dispatch(Action::DismissError)
                >
                    "×"
                </button>
            </div>
        })
    }
}
