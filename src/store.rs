//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use nav_core::{Collection, ResourceItem, SearchEngine};

use crate::browser;
use crate::models::{Notice, NoticeKind};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mirror of the collection table, replaced after every mutation
    pub collection: Collection,
    /// Current local search query
    pub query: String,
    /// Engine used for external search
    pub engine: SearchEngine,
    /// Visible toast notices
    pub notices: Vec<Notice>,
    pub next_notice_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: browser::load_search_engine(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the collection mirror with freshly read items
pub fn store_set_collection(store: &AppStore, items: Vec<ResourceItem>) {
    *store.collection().write() = Collection::new(items);
}

/// Push a notice and return its id
pub fn store_push_notice(store: &AppStore, kind: NoticeKind, message: String) -> u32 {
    let id = {
        let field = store.next_notice_id();
        let mut next = field.write();
        *next += 1;
        *next
    };
    store.notices().write().push(Notice { id, kind, message });
    id
}

/// Remove a notice by ID; a store that is already gone is ignored
pub fn store_remove_notice(store: &AppStore, notice_id: u32) {
    if let Some(mut notices) = store.notices().try_write() {
        notices.retain(|notice| notice.id != notice_id);
    }
}
