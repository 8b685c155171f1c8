//! Log Panel
//!
//! Collapsible view of the lines the rolling logger keeps in memory.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move || set_lines.set(rolling_logger::recent());

    view! {
        <div class="log-panel">
            <button
                class="log-toggle"
                on:click=move |_| {
                    if !open.get_untracked() {
                        refresh();
                    }
                    set_open.update(|o| *o = !*o);
                }
            >
                {move || if open.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || open.get()>
                <button class="log-refresh" on:click=move |_| refresh()>"Refresh"</button>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </Show>
        </div>
    }
}
