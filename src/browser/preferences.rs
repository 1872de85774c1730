//! Preferences
//!
//! Small user settings kept in `localStorage`.

use nav_core::SearchEngine;

const SEARCH_ENGINE_KEY: &str = "nav-page.search-engine";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// The remembered search engine, or the default one
pub fn load_search_engine() -> SearchEngine {
    storage()
        .and_then(|s| s.get_item(SEARCH_ENGINE_KEY).ok().flatten())
        .and_then(|value| SearchEngine::parse(&value))
        .unwrap_or_default()
}

/// Remember the selected search engine; returns whether it was stored
pub fn save_search_engine(engine: SearchEngine) -> bool {
    storage()
        .and_then(|s| s.set_item(SEARCH_ENGINE_KEY, engine.as_str()).ok())
        .is_some()
}
