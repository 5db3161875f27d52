//! Shop Shortlist Frontend Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod context;
mod error;
mod export;
mod models;
mod search;
mod shortlist;
mod store;

use app::App;
use catalog::Catalog;
use config::ShopConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match ShopConfig::from_document() {
        Ok(config) => (config, None),
        Err(e) => (ShopConfig::default(), Some(e)),
    };
    if let Err(e) = console_logger::init(config.level_filter()) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::error!("{}, using defaults", e);
    }

    let catalog = Catalog::from_document().unwrap_or_else(|e| {
        log::error!("{}", e);
        Catalog::default()
    });

    mount_to_body(move || view! { <App config=config.clone() catalog=catalog.clone() /> });
}
