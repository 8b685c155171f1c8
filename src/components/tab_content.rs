//! Tab Content Component
//!
//! Topic cards of the active tab, or the empty-state message.

use leptos::prelude::*;
use tab_marks_lib::controller::Action;
use tab_marks_lib::tree::{RenderTree, TabContent};

use crate::components::{DropZone, TopicCard, TOPIC_GROUP};
use crate::context::use_app_context;

#[component]
pub fn TabContentView(view: Memo<RenderTree>) -> impl IntoView {
    let ctx = use_app_context();
    let empty_message = move || {
        view.with(|v| match &v.content {
            TabContent::Empty { message } => Some(message.clone()),
            TabContent::Topics(_) => None,
        })
    };
    let topic_ids = move || {
        view.with(|v| match &v.content {
            TabContent::Topics(topics) => topics.iter().map(|t| t.id.clone()).collect::<Vec<_>>(),
            TabContent::Empty { .. } => Vec::new(),
        })
    };
    let topic_count = move || view.with(|v| match &v.content {
        TabContent::Topics(topics) => topics.len(),
        TabContent::Empty { .. } => 0,
    });

    view! {
        {move || match empty_message() {
            Some(message) => view! { <p class="empty-state">{message}</p> }.into_any(),
            None => view! {
                <div class="topic-list">
                    // Keyed by id: a card outlives edits to its own topic
                    <For
                        each=topic_ids
                        key=|id| id.clone()
                        children=move |id| view! { <TopicCard view=view id=id /> }
                    />
                    <DropZone group=TOPIC_GROUP list_id=None slot=Signal::derive(topic_count) />
                    <button
                        class="topic-add-btn"
                        on:click=move |_| ctx.dispatch(Action::AddTopic)
                    >
                        "+ New topic"
                    </button>
                </div>
            }
            .into_any(),
        }}
    }
}
