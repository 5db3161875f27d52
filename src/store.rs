//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Product, ShortlistEntry};
use crate::search;
use crate::shortlist::Shortlist;

/// Component state, created at mount and dropped on unmount
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Raw text of the search input (updated on every keystroke)
    pub query: String,
    /// Products shown in the result list
    pub results: Vec<Product>,
    /// User's shortlist
    pub shortlist: Shortlist,
    /// Whether the shortlist panel is shown
    pub list_visible: bool,
    /// Last export/error message shown under the list
    pub status: Option<String>,
}

impl ShopState {
    pub fn with_results(results: Vec<Product>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the query text
pub fn store_set_query(store: &ShopStore, query: String) {
    *store.query().write() = query;
}

/// Run the current query against `products` and replace the results
pub fn store_run_search(
    store: &ShopStore,
    products: &[Product],
    sample_size: usize,
    random: impl FnMut() -> f64,
) -> usize {
    let query = store.query().get_untracked();
    let results = search::search(products, &query, sample_size, random);
    let hits = results.len();
    log::info!("search {:?}: {} result(s)", search::normalize_query(&query), hits);
    *store.results().write() = results;
    hits
}

/// Add one unit of a product to the shortlist
pub fn store_add_to_shortlist(store: &ShopStore, product: &Product) {
    let quantity = store.shortlist().write().add(product);
    log::info!("added {:?} (quantity {})", product.name, quantity);
}

/// Remove a shortlist entry by product name
pub fn store_remove_from_shortlist(store: &ShopStore, name: &str) -> Option<ShortlistEntry> {
    let removed = store.shortlist().write().remove(name);
    match &removed {
        Some(entry) => log::info!("removed {:?} (quantity {})", entry.name, entry.quantity),
        None => log::debug!("remove {:?}: not in shortlist", name),
    }
    removed
}

/// Show/hide the shortlist panel. Clears any export status, since the
/// timer that would clear it dies with the hidden panel.
pub fn store_toggle_list(store: &ShopStore) {
    let field = store.list_visible();
    let visible = {
        let mut visible = field.write();
        *visible = !*visible;
        *visible
    };
    store_set_status(store, None);
    log::debug!("shortlist visible: {}", visible);
}

pub fn store_set_status(store: &ShopStore, status: Option<String>) {
    *store.status().write() = status;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::format_price;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Leche entera 1L", 1.25),
            Product::new("Pan lactal", 2.10),
            Product::new("Dulce de leche 400g", 2.60),
        ]
    }

    fn with_store(f: impl FnOnce(ShopStore)) {
        let owner = Owner::new();
        owner.with(|| f(Store::new(ShopState::default())));
    }

    #[test]
    fn test_search_replaces_results() {
        with_store(|store| {
            store_set_query(&store, "LECHE ".to_string());
            let hits = store_run_search(&store, &catalog(), 5, || 0.0);
            assert_eq!(hits, 2);
            let names: Vec<_> = store
                .results()
                .get_untracked()
                .into_iter()
                .map(|p| p.name)
                .collect();
            assert_eq!(names, vec!["Leche entera 1L", "Dulce de leche 400g"]);
        });
    }

    #[test]
    fn test_blank_query_samples() {
        with_store(|store| {
            assert_eq!(store_run_search(&store, &catalog(), 2, || 0.0), 2);
        });
    }

    #[test]
    fn test_add_remove_and_total() {
        with_store(|store| {
            let products = catalog();
            store_add_to_shortlist(&store, &products[0]);
            store_add_to_shortlist(&store, &products[0]);
            store_add_to_shortlist(&store, &products[1]);
            let list = store.shortlist().get_untracked();
            assert_eq!(list.len(), 2);
            assert_eq!(list.get("Leche entera 1L").unwrap().quantity, 2);
            assert_eq!(format_price(list.total()), "4.60");

            assert!(store_remove_from_shortlist(&store, "Pan lactal").is_some());
            assert!(store_remove_from_shortlist(&store, "Pan lactal").is_none());
            let list = store.shortlist().get_untracked();
            assert_eq!(list.len(), 1);
            assert_eq!(format_price(list.total()), "2.50");
        });
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        with_store(|store| {
            store_add_to_shortlist(&store, &catalog()[2]);
            let before = store.shortlist().get_untracked();
            assert!(!store.list_visible().get_untracked());

            store_toggle_list(&store);
            assert!(store.list_visible().get_untracked());
            store_toggle_list(&store);
            assert!(!store.list_visible().get_untracked());
            assert_eq!(store.shortlist().get_untracked(), before);
        });
    }

    #[test]
    fn test_toggle_clears_export_status() {
        with_store(|store| {
            store_toggle_list(&store);
            store_set_status(&store, Some("PDF generado: lista.pdf".to_string()));
            store_toggle_list(&store);
            assert_eq!(store.status().get_untracked(), None);
            store_toggle_list(&store);
            assert!(store.list_visible().get_untracked());
            assert_eq!(store.status().get_untracked(), None);
        });
    }
}
