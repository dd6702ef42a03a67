//! Log Panel Component
//!
//! Collapsible view of the logger's rolling buffer, mounted when the page
//! runs with `?log=debug` or `?log=trace`.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(console_logger::recent_lines());

    view! {
        <details class="log-panel">
            <summary>"Log"</summary>
            <button
                type="button"
                on:click=move |_| set_lines.set(console_logger::recent_lines())
            >
                "Refresh"
            </button>
            <pre>{move || lines.get().join("\n")}</pre>
        </details>
    }
}
