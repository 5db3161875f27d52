//! Result List Component
//!
//! Current search results, each with an add-to-shortlist button.

use leptos::prelude::*;

use crate::context::use_shop_context;
use crate::models::format_price;
use crate::store::{store_add_to_shortlist, use_shop_store, ShopStateStoreFields};

#[component]
pub fn ResultList() -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_shop_store();

    move || {
        let results = store.results().get();
        if results.is_empty() {
            return view! { <p class="empty-results">"No se encontraron productos"</p> }.into_any();
        }

        let currency = ctx.currency();
        view! {
            <ul class="result-list">
                {results.into_iter().map(|product| {
                    let label = format!("{} - {}{}", product.name, currency, format_price(product.price));
                    view! {
                        <li class="result-item">
                            <span>{label}</span>
                            <button
                                class="add-btn"
                                on:click=move |_| store_add_to_shortlist(&store, &product)
                            >
                                "Agregar a lista"
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        }
        .into_any()
    }
}
