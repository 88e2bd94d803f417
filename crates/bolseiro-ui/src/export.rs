//! Browser export glue: file download and clipboard copy.
//!
//! Both operations are fire-and-forget side effects triggered from header
//! actions; failures are logged and never surfaced.

use wasm_bindgen::{JsCast, JsValue};

/// Offer the document as a file download under the given filename.
pub fn download_html(filename: &str, html: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("download unavailable: no document");
        return;
    };

    let parts = js_sys::Array::of1(&JsValue::from_str(html));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/html");

    let blob = match web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) {
        Ok(blob) => blob,
        Err(err) => {
            log::warn!("blob creation failed: {err:?}");
            return;
        }
    };
    let url = match web_sys::Url::create_object_url_with_blob(&blob) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("object URL creation failed: {err:?}");
            return;
        }
    };

    // A temporary anchor carries the download attribute; clicking it starts
    // the save dialog.
    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
    match (anchor, document.body()) {
        (Some(anchor), Some(body)) => {
            anchor.set_href(&url);
            anchor.set_download(filename);
            let _ = body.append_child(&anchor);
            anchor.click();
            let _ = body.remove_child(&anchor);
        }
        _ => log::warn!("download unavailable: no body element"),
    }

    let _ = web_sys::Url::revoke_object_url(&url);
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("clipboard unavailable: no window");
        return;
    };
    // The returned promise is intentionally not awaited.
    let _ = window.navigator().clipboard().write_text(text);
}
