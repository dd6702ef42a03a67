//! Stats Footer Component

use leptos::prelude::*;

use packing_list::Summary;

use crate::store::{store_items, use_app_store};

#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_app_store();
    let summary = Memo::new(move |_| Summary::of(&store_items(&store)));

    view! {
        <footer class="stats">
            {move || match summary.get() {
                Summary::Empty => view! { <p>{Summary::Empty.to_string()}</p> }.into_any(),
                progress => view! { <em>{progress.to_string()}</em> }.into_any(),
            }}
        </footer>
    }
}
