//! Shop Configuration
//!
//! Optional JSON config read from an inline `<script id="shop-config">`
//! element. Every field has a default, so a partial or missing config is fine.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ShopResult;

/// Id of the inline config element in `index.html`
pub const CONFIG_ELEMENT_ID: &str = "shop-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Number of products shown for an empty query
    pub sample_size: usize,
    pub currency_symbol: String,
    pub log_level: String,
    pub export: ExportConfig,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            sample_size: 5,
            currency_symbol: "$".to_string(),
            log_level: "info".to_string(),
            export: ExportConfig::default(),
        }
    }
}

/// PDF page geometry, in points
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub page_width: i64,
    pub page_height: i64,
    pub margin_left: i64,
    pub margin_top: i64,
    pub row_height: i64,
    pub font_size: i64,
    pub title_font_size: i64,
    /// x offsets of the quantity and price columns, relative to the left margin
    pub quantity_column: i64,
    pub price_column: i64,
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            page_width: 595,
            page_height: 842,
            margin_left: 40,
            margin_top: 60,
            row_height: 20,
            font_size: 12,
            title_font_size: 16,
            quantity_column: 330,
            price_column: 400,
            file_prefix: "lista-de-compras".to_string(),
        }
    }
}

impl ShopConfig {
    pub fn from_json(json: &str) -> ShopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsed log level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Read config from the page; defaults when the element is absent
    pub fn from_document() -> ShopResult<Self> {
        match inline_json(CONFIG_ELEMENT_ID) {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }
}

/// Text content of an inline `<script type="application/json">` element
pub fn inline_json(element_id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(element_id)?.text_content()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.sample_size, 5);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.export.page_width, 595);
        assert_eq!(config.export.file_prefix, "lista-de-compras");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ShopConfig::from_json(r#"{ "sample_size": 8, "export": { "row_height": 14 } }"#)
            .expect("valid config");
        assert_eq!(config.sample_size, 8);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.export.row_height, 14);
        assert_eq!(config.export.font_size, 12);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ShopConfig::from_json("{}").unwrap(), ShopConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = ShopConfig::from_json("{ sample_size: 3").unwrap_err();
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn test_level_filter() {
        let mut config = ShopConfig::default();
        assert_eq!(config.level_filter(), LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
