//! File Transfer
//!
//! Text downloads through an object URL and reading the file picked in an
//! `<input type="file">`.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlInputElement, Url};

use super::js_error;

/// Delay before the object URL of a download is released
const REVOKE_DELAY_MS: u32 = 1_000;

/// Offer `text` to the user as a file download
pub fn download_text(file_name: &str, mime_type: &str, text: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

/// Text of the single file selected in `input`; `None` unless exactly one
/// file is selected
pub async fn read_selected_file(input: &HtmlInputElement) -> Result<Option<String>, String> {
    let Some(files) = input.files() else {
        return Ok(None);
    };
    if files.length() != 1 {
        return Ok(None);
    }
    let Some(file) = files.get(0) else {
        return Ok(None);
    };
    let text = JsFuture::from(file.text()).await.map_err(js_error)?;
    text.as_string()
        .map(Some)
        .ok_or_else(|| format!("'{}' is not a text file", file.name()))
}
