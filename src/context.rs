//! Application Context
//!
//! Read-only config and catalog provided via Leptos Context API.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::config::ShopConfig;
use crate::models::Product;
use crate::search;
use crate::store::{store_run_search, ShopStore};

/// App-wide read-only values provided via context
#[derive(Clone, Copy)]
pub struct ShopContext {
    pub config: StoredValue<ShopConfig>,
    pub catalog: StoredValue<Catalog>,
}

impl ShopContext {
    pub fn new(config: ShopConfig, catalog: Catalog) -> Self {
        Self {
            config: StoredValue::new(config),
            catalog: StoredValue::new(catalog),
        }
    }

    pub fn currency(&self) -> String {
        self.config.with_value(|c| c.currency_symbol.clone())
    }

    /// Random sample shown on mount
    pub fn initial_results(&self) -> Vec<Product> {
        let sample_size = self.config.with_value(|c| c.sample_size);
        self.catalog.with_value(|catalog| {
            search::sample_products(catalog.products(), sample_size, js_sys::Math::random)
        })
    }

    /// Run the store's current query against the catalog
    pub fn run_search(&self, store: &ShopStore) {
        let sample_size = self.config.with_value(|c| c.sample_size);
        self.catalog.with_value(|catalog| {
            store_run_search(store, catalog.products(), sample_size, js_sys::Math::random);
        });
    }
}

/// Get the shop context
pub fn use_shop_context() -> ShopContext {
    expect_context::<ShopContext>()
}
