//! Navigation
//!
//! Opening external pages and document-level settings.

use super::js_error;

/// Open `url` in a new browsing context
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(js_error)?;
    Ok(())
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
