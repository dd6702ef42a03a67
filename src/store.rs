//! Packing List Store
//!
//! Holds the canonical item list and the id source for the page. The list is
//! only ever replaced through [`dispatch`].

use leptos::prelude::*;
use reactive_stores::Store;

use packing_list::{AddForm, IdGenerator, Intent, Item, ItemList, Summary};

/// Everything the page owns besides transient form and sort state
#[derive(Debug, Default, Store)]
pub struct AppState {
    /// Canonical packing list
    pub items: ItemList,
    /// Source of fresh item ids
    pub ids: IdGenerator,
}

pub type AppStore = Store<AppState>;

/// Store provided by [`crate::app::App`]
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Current list, tracked
pub fn store_items(store: &AppStore) -> ItemList {
    store.items().get()
}

/// Current list, without subscribing the caller
pub fn store_items_untracked(store: &AppStore) -> ItemList {
    store.items().get_untracked()
}

/// Turn the pending form input into an item stamped with the current time
pub fn store_submit(store: &AppStore, form: &mut AddForm) -> Option<Item> {
    let now_ms = js_sys::Date::now() as u64;
    form.submit(&mut store.ids().write(), now_ms)
}

/// Apply an intent to the list and let every view re-derive
pub fn dispatch(store: &AppStore, intent: Intent) {
    log::debug!("[STORE] {:?}", intent);
    let next = store.items().read_untracked().apply(intent);
    log::debug!("[STORE] {}", Summary::of(&next).compact());
    *store.items().write() = next;
}
