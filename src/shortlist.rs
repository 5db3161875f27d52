//! Shortlist
//!
//! User-curated products with quantities. Entries are keyed by product name:
//! adding an existing name bumps its quantity, removing drops the whole entry.

use crate::models::{Product, ShortlistEntry};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shortlist {
    entries: Vec<ShortlistEntry>,
}

impl Shortlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`; returns the resulting quantity
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == product.name) {
            entry.quantity += 1;
            return entry.quantity;
        }
        self.entries.push(ShortlistEntry::from_product(product));
        1
    }

    /// Remove the entry for `name`. `None` (and no change) if absent.
    pub fn remove(&mut self, name: &str) -> Option<ShortlistEntry> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx))
    }

    pub fn get(&self, name: &str) -> Option<&ShortlistEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[ShortlistEntry] {
        &self.entries
    }

    /// Sum of price × quantity, computed on every call
    pub fn total(&self) -> f64 {
        // `Sum for f64` starts at -0.0, which formats as "-0.00"
        self.entries.iter().fold(0.0, |acc, e| acc + e.subtotal())
    }

    /// Number of units across all entries
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
