//! Product Catalog
//!
//! Static, read-only product list. The default ships embedded in the binary;
//! a page can replace it with an inline `<script id="shop-catalog">` array.

use std::collections::HashSet;

use crate::config::inline_json;
use crate::error::{ShopError, ShopResult};
use crate::models::Product;

/// Id of the inline catalog element in `index.html`
pub const CATALOG_ELEMENT_ID: &str = "shop-catalog";

const EMBEDDED_CATALOG: &str = include_str!("../assets/products.json");

/// Ordered product list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validate products. Names must be unique: the shortlist is keyed by name.
    pub fn new(products: Vec<Product>) -> ShopResult<Self> {
        validate(&products)?;
        Ok(Self { products })
    }

    pub fn from_json(json: &str) -> ShopResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| ShopError::Catalog(e.to_string()))?;
        Self::new(products)
    }

    /// Catalog compiled into the binary
    pub fn embedded() -> ShopResult<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Page-provided catalog if present and valid, else the embedded one
    pub fn from_document() -> ShopResult<Self> {
        if let Some(json) = inline_json(CATALOG_ELEMENT_ID) {
            match Self::from_json(&json) {
                Ok(catalog) => return Ok(catalog),
                Err(e) => log::error!("{}, falling back to embedded catalog", e),
            }
        }
        Self::embedded()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn validate(products: &[Product]) -> ShopResult<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for (idx, product) in products.iter().enumerate() {
        if product.name.trim().is_empty() {
            return Err(ShopError::Catalog(format!("product #{} has an empty name", idx + 1)));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(ShopError::Catalog(format!(
                "product '{}' has invalid price {}",
                product.name, product.price
            )));
        }
        if !seen.insert(product.name.as_str()) {
            return Err(ShopError::Catalog(format!(
                "product '{}' is listed more than once",
                product.name
            )));
        }
    }
    Ok(())
}
