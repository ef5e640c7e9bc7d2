//! Admin Console Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod notes;
mod notify;
mod route;
mod store;
mod sysinfo;
mod validate;

use app::App;
use config::AdminConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AdminConfig::load();
    if let Err(e) = rolling_logger::init(config.level_filter(), rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] logger already installed: {}", e).into());
    }
    log::info!("[APP] starting, api_base={}", config.api_base);

    let notes_drop = config.notes_drop;
    api::init(config);
    mount_to_body(move || view! { <App notes_drop=notes_drop /> });
}
