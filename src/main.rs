//! Todo Widget Entry Point

mod app;
mod components;
mod config;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    let level = config.as_ref().map(AppConfig::log_level).unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    let config = config.unwrap_or_else(|e| {
        log::warn!("[CONFIG] ignoring {}: {}", config::CONFIG_ATTRIBUTE, e);
        AppConfig::default()
    });

    mount_to_body(move || view! { <App config=config /> });
}
