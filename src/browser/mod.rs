//! Browser Bindings
//!
//! Thin wrappers over the web APIs the page needs, organized by concern.

mod files;
mod idb;
mod navigation;
mod preferences;

use wasm_bindgen::{JsCast, JsValue};

pub use files::*;
pub use idb::IdbStore;
pub use navigation::*;
pub use preferences::*;

/// Describe a JS error value for logs and notices
pub(crate) fn js_error(err: JsValue) -> String {
    if let Some(exception) = err.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
