//! Item Row Component
//!
//! One list entry with packed checkbox and delete button.

use leptos::prelude::*;

use packing_list::{Intent, Item};

#[component]
pub fn ItemRow(item: Item, #[prop(into)] on_intent: Callback<Intent>) -> impl IntoView {
    let id = item.id;
    let packed = item.packed;
    let label = item.label();

    view! {
        <li class=if packed { "item-row packed" } else { "item-row" }>
            <input
                type="checkbox"
                prop:checked=packed
                on:change=move |_| on_intent.run(Intent::Toggle(id))
            />
            <span style=if packed { "text-decoration: line-through;" } else { "" }>
                {label}
            </span>
            <button class="delete-btn" on:click=move |_| on_intent.run(Intent::Delete(id))>
                "❌"
            </button>
        </li>
    }
}
