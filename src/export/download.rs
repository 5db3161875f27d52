//! Browser Download
//!
//! Hands generated bytes to the browser as a file download.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::{ShopError, ShopResult};

/// Offer `bytes` as a download named `file_name`
pub fn trigger_download(bytes: &[u8], file_name: &str, mime: &str) -> ShopResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ShopError::Browser("no document available".to_string()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(ShopError::browser)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(ShopError::browser)?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(ShopError::browser)?
        .dyn_into()
        .map_err(|_| ShopError::Browser("created element is not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(ShopError::browser)
}
