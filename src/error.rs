//! Error Types
//!
//! Failures at the fallible edges: catalog/config parsing, PDF rendering, and
//! the browser download.

use thiserror::Error;

/// Common result type for fallible shop operations
pub type ShopResult<T> = Result<T, ShopError>;

#[derive(Debug, Error)]
pub enum ShopError {
    /// Catalog JSON could not be parsed or holds an invalid product
    #[error("invalid catalog: {0}")]
    Catalog(String),

    /// Config JSON could not be parsed
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// PDF content could not be encoded or serialized
    #[error("pdf export failed: {0}")]
    Pdf(String),

    /// Blob, object URL or DOM call failed
    #[error("browser error: {0}")]
    Browser(String),
}

impl ShopError {
    pub fn pdf(err: impl std::fmt::Display) -> Self {
        Self::Pdf(err.to_string())
    }

    /// Wrap a `JsValue` thrown by a web-sys call
    pub fn browser(err: wasm_bindgen::JsValue) -> Self {
        Self::Browser(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}
