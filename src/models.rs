//! Frontend Models
//!
//! Catalog products and shortlist entries.

use serde::{Deserialize, Serialize};

/// Product from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// One line of the shortlist; at most one per product name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub name: String,
    pub price: f64,
    /// Always >= 1
    pub quantity: u32,
}

impl ShortlistEntry {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Format an amount with two decimals, as shown on screen and in exports
pub fn format_price(amount: f64) -> String {
    format!("{:.2}", amount)
}
