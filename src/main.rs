//! Far Away Frontend Entry Point

mod app;
mod components;
mod config;
mod dialog;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    if let Err(e) = console_logger::init_logger(config.log_level) {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&e));
    }
    log::info!("[APP] Starting with log level {}", config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
