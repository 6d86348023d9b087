//! Client-side file download.

use gloo::file::{Blob, ObjectUrl};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use super::document;

/// Offer `content` as a download named `file_name`.
///
/// The object URL is revoked when this returns; the browser has already
/// started the download by then.
pub fn download_text(file_name: &str, content: &str, mime_type: &str) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let url = ObjectUrl::from(Blob::new_with_options(content, Some(mime_type)));

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    tracing::info!(file_name, bytes = content.len(), "download started");
    Ok(())
}
