//! Shopping List Frontend Entry Point

mod models;
mod error;
mod config;
mod store;
mod render;
mod controller;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    // Logger goes in first so config problems are reported
    if let Err(e) = console_logger::init(LevelFilter::Info) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        AppConfig::default()
    });
    let level = config.level_filter().unwrap_or(LevelFilter::Info);
    log::set_max_level(level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
