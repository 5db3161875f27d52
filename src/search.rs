//! Catalog Search
//!
//! Case-insensitive substring filter plus the uniform random sample shown for
//! an empty query.

use crate::models::Product;

/// Lowercase and trim a raw query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Products whose name contains `query` (already normalized), in catalog order
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(query))
        .cloned()
        .collect()
}

/// Uniform sample of up to `count` distinct products.
///
/// Partial Fisher–Yates over indices. `random` must yield values in `[0, 1)`,
/// e.g. `js_sys::Math::random`.
pub fn sample_products(
    products: &[Product],
    count: usize,
    mut random: impl FnMut() -> f64,
) -> Vec<Product> {
    let len = products.len();
    let count = count.min(len);
    let mut indices: Vec<usize> = (0..len).collect();

    for i in 0..count {
        let span = len - i;
        let offset = ((random() * span as f64) as usize).min(span - 1);
        indices.swap(i, i + offset);
    }

    indices[..count]
        .iter()
        .map(|&idx| products[idx].clone())
        .collect()
}

/// Run a search: filtered results for a query, a random sample when it is blank
pub fn search(
    products: &[Product],
    raw_query: &str,
    sample_size: usize,
    random: impl FnMut() -> f64,
) -> Vec<Product> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        sample_products(products, sample_size, random)
    } else {
        filter_products(products, &query)
    }
}
