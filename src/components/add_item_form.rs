//! Add Item Form Component
//!
//! Quantity selector plus description input. Emits an add intent on submit.

use leptos::prelude::*;

use packing_list::{quantity_options, AddForm, Intent};

use crate::store::{store_submit, use_app_store};

#[component]
pub fn AddItemForm(#[prop(into)] on_add: Callback<Intent>) -> impl IntoView {
    let store = use_app_store();
    let form = RwSignal::new(AddForm::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut pending = form.get_untracked();
        let Some(item) = store_submit(&store, &mut pending) else {
            return;
        };
        match serde_json::to_string(&item) {
            Ok(json) => log::info!("[FORM] New item {}", json),
            Err(e) => log::warn!("[FORM] New item {} (unserializable: {})", item.id, e),
        }
        form.set(pending);
        on_add.run(Intent::Add(item));
    };

    view! {
        <form class="add-form" on:submit=submit>
            <h3>"What do you need for your 😍 trip?"</h3>
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| {
                    if let Err(e) = f.set_quantity_str(&value) {
                        log::warn!("[FORM] {}", e);
                    }
                });
            }>
                {quantity_options().map(|n| view! {
                    <option
                        value=n.to_string()
                        prop:selected=move || form.with(|f| f.quantity() == n)
                    >
                        {n}
                    </option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="item ..."
                prop:value=move || form.with(|f| f.description().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_description(value));
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
