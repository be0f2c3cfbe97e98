//! Clinic Admin Frontend Entry Point

mod models;
mod api;
mod config;
mod error;
mod filters;
mod format;
mod listing;
mod schedule;
mod validation;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    if console_logger::init(console_logger::parse_level(&config.log_level)).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already initialised".into());
    }
    if let Some(err) = config_error {
        log::warn!("Using default configuration: {}", err);
    }
    api::set_base_url(&config.api_base);
    log::info!("Starting clinic admin (page size {})", config.page_size);

    mount_to_body(move || view! { <App config=config /> });
}
