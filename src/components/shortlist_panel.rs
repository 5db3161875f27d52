//! Shortlist Panel Component
//!
//! Visibility toggle, shortlist entries with remove buttons, running total
//! and the PDF export action.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_shop_context;
use crate::export::{download_shortlist, total_line};
use crate::models::format_price;
use crate::store::{
    store_remove_from_shortlist, store_set_status, store_toggle_list, use_shop_store,
    ShopStateStoreFields,
};

/// How long the export status line stays visible
const STATUS_TIMEOUT_MS: u32 = 4_000;

#[component]
pub fn ShortlistPanel() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <div class="shortlist-panel">
            <button class="toggle-list-btn" on:click=move |_| store_toggle_list(&store)>
                {move || if store.list_visible().get() { "Ocultar la lista" } else { "Ver mi lista" }}
            </button>

            <Show when=move || store.list_visible().get()>
                <ShortlistEntries />
                <ShortlistTotal />
                <ExportButton />
            </Show>
        </div>
    }
}

#[component]
fn ShortlistEntries() -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_shop_store();

    view! {
        <ul class="shortlist">
            {move || {
                let list = store.shortlist().get();
                if list.is_empty() {
                    return view! { <li class="empty-list">"Lista vacía"</li> }.into_any();
                }

                let currency = ctx.currency();
                list.entries().iter().map(|entry| {
                    let name = entry.name.clone();
                    let label = format!(
                        "{} x{} - {}{}",
                        entry.name,
                        entry.quantity,
                        currency,
                        format_price(entry.price)
                    );
                    view! {
                        <li class="shortlist-item">
                            <span>{label}</span>
                            <button
                                class="remove-btn"
                                on:click=move |_| {
                                    store_remove_from_shortlist(&store, &name);
                                }
                            >
                                "Quitar"
                            </button>
                        </li>
                    }
                }).collect_view().into_any()
            }}
        </ul>
    }
}

#[component]
fn ShortlistTotal() -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_shop_store();

    view! {
        <div class="shortlist-total">
            {move || store.shortlist().with(|list| total_line(list.total(), &ctx.currency()))}
        </div>
        <p class="item-count">
            {move || format!("{} productos", store.shortlist().with(|list| list.item_count()))}
        </p>
    }
}

#[component]
fn ExportButton() -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_shop_store();
    // Replacing or disposing the timeout cancels it
    let pending_clear = StoredValue::new_local(None::<Timeout>);

    let on_export = move |_| {
        let result = store
            .shortlist()
            .with_untracked(|list| ctx.config.with_value(|config| download_shortlist(list, config)));
        let status = match result {
            Ok(file_name) => format!("PDF generado: {}", file_name),
            Err(e) => {
                log::error!("{}", e);
                "No se pudo generar el PDF".to_string()
            }
        };
        store_set_status(&store, Some(status));
        pending_clear.set_value(Some(Timeout::new(STATUS_TIMEOUT_MS, move || {
            store_set_status(&store, None)
        })));
    };

    view! {
        <button class="export-btn" on:click=on_export>"Descargar PDF"</button>
        {move || store.status().get().map(|msg| view! { <p class="export-status">{msg}</p> })}
    }
}
