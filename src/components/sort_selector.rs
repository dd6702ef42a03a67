//! Sort Selector Component

use leptos::prelude::*;

use packing_list::SortKey;

/// Dropdown over every [`SortKey`]
#[component]
pub fn SortSelector(
    sort_key: ReadSignal<SortKey>,
    on_change: impl Fn(SortKey) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select on:change=move |ev| {
            match event_target_value(&ev).parse::<SortKey>() {
                Ok(key) => on_change(key),
                Err(e) => log::warn!("[LIST] {}", e),
            }
        }>
            {SortKey::ALL.into_iter().map(|key| view! {
                <option
                    value=key.as_str()
                    prop:selected=move || sort_key.get() == key
                >
                    {key.label()}
                </option>
            }).collect_view()}
        </select>
    }
}
