//! Stock Tracker Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dashboard;
mod error;
mod logging;
mod modal;
mod models;
mod notify;
mod poller;
mod render;
mod store;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logging::init(&config.log_level);
    tracing::info!(api_base = %config.api_base, "stock tracker frontend starting");

    mount_to_body(move || view! { <App config=config /> });
}
