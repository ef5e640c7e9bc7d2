//! Log Panel Component
//!
//! Sidebar toggle showing the in-memory log buffer, for operators
//! reporting a problem without devtools open.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let toggle = move |_| {
        let next = !open.get();
        if next {
            set_lines.set(rolling_logger::recent_lines());
        }
        set_open.set(next);
    };

    view! {
        <div class="log-panel">
            <button class="btn btn-link" on:click=toggle>
                {move || if open.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || open.get()>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </Show>
        </div>
    }
}
