//! Packing List Component
//!
//! Rows in the chosen display order, the sort selector and the clear button.
//! The sort key is local view state; the canonical list is never reordered.

use leptos::prelude::*;

use packing_list::{request_clear, sorted_items, Intent, Item, SortKey};

use crate::components::{ItemRow, SortSelector};
use crate::dialog::BrowserConfirm;
use crate::store::{store_items, store_items_untracked, use_app_store};

#[component]
pub fn PackingList(#[prop(into)] on_intent: Callback<Intent>) -> impl IntoView {
    let store = use_app_store();
    let (sort_key, set_sort_key) = signal(SortKey::default());

    let rows = move || sorted_items(&store_items(&store), sort_key.get());

    let clear = move |_| {
        let items = store_items_untracked(&store);
        match request_clear(&items, &BrowserConfirm) {
            Some(intent) => on_intent.run(intent),
            None => log::info!("[LIST] Clear cancelled"),
        }
    };

    view! {
        <div class="list">
            <ul>
                <For
                    each=rows
                    key=|item| (item.id, item.packed)
                    children=move |item: Item| view! { <ItemRow item=item on_intent=on_intent /> }
                />
            </ul>
            <div class="actions">
                <SortSelector
                    sort_key=sort_key
                    on_change=move |key| {
                        log::debug!("[LIST] Sort by {}", key);
                        set_sort_key.set(key);
                    }
                />
                <button on:click=clear>"Clear list"</button>
            </div>
        </div>
    }
}
