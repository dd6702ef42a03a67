//! Far Away App
//!
//! Root component. Owns the store and the single intent dispatcher every
//! child reports to.

use leptos::prelude::*;
use reactive_stores::Store;

use packing_list::Intent;

use crate::components::{AddItemForm, LogPanel, Logo, PackingList, StatsFooter};
use crate::config::AppConfig;
use crate::store::{dispatch, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let on_intent = Callback::new(move |intent: Intent| dispatch(&store, intent));

    log::info!("[APP] Mounted");

    view! {
        <div class="app">
            <Logo />
            <AddItemForm on_add=on_intent />
            <PackingList on_intent=on_intent />
            <StatsFooter />
            {config.show_log_panel().then(|| view! { <LogPanel /> })}
        </div>
    }
}
