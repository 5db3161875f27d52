//! Shop Frontend App
//!
//! Root component: owns the store and provides it with the shop context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::components::{ResultList, SearchBar, ShortlistPanel};
use crate::config::ShopConfig;
use crate::context::ShopContext;
use crate::store::ShopState;

#[component]
pub fn App(config: ShopConfig, catalog: Catalog) -> impl IntoView {
    if catalog.is_empty() {
        log::warn!("catalog is empty, nothing to search");
    } else {
        log::info!("mounting with {} catalog products", catalog.len());
    }

    let ctx = ShopContext::new(config, catalog);
    // Seed results with a random sample
    let store = Store::new(ShopState::with_results(ctx.initial_results()));

    provide_context(ctx);
    provide_context(store);

    view! {
        <div class="shop-app">
            <h1>"Store Price Search"</h1>
            <SearchBar />
            <ResultList />
            <ShortlistPanel />
        </div>
    }
}
