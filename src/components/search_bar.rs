//! Search Bar Component
//!
//! Query input plus the search button. Enter submits the form.

use leptos::prelude::*;

use crate::context::use_shop_context;
use crate::store::{store_set_query, use_shop_store, ShopStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_shop_store();

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.run_search(&store);
    };

    view! {
        <form class="search-bar" on:submit=on_search>
            <input
                type="text"
                placeholder="Buscar un producto..."
                prop:value=move || store.query().get()
                on:input=move |ev| store_set_query(&store, event_target_value(&ev))
            />
            <button type="submit">"Buscar"</button>
        </form>
    }
}
