//! IndexedDB Collection Store
//!
//! Each call opens the database, runs a single transaction on the
//! collection table and closes the handle again. The table is created on
//! the first open (`onupgradeneeded`), keyed by the item's url.

use async_trait::async_trait;
use js_sys::{Function, Promise};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    IdbDatabase, IdbFactory, IdbObjectStore, IdbObjectStoreParameters, IdbRequest,
    IdbTransactionMode,
};

use nav_core::{CollectionStore, DomainError, DomainResult, ResourceItem, MY_COLLECTION_TABLE};

use super::js_error;

/// Database holding the collection table
pub const DB_NAME: &str = "nav-page";
const DB_VERSION: u32 = 1;
const KEY_PATH: &str = "url";

/// Collection store backed by the browser's IndexedDB
#[derive(Debug, Clone, Copy)]
pub struct IdbStore {
    db_name: &'static str,
    table: &'static str,
}

impl IdbStore {
    pub fn new() -> Self {
        Self {
            db_name: DB_NAME,
            table: MY_COLLECTION_TABLE,
        }
    }

    fn factory() -> Option<IdbFactory> {
        web_sys::window()?.indexed_db().ok().flatten()
    }

    async fn open(&self) -> Result<IdbDatabase, JsValue> {
        let factory = Self::factory().ok_or_else(|| JsValue::from_str("indexedDB is unavailable"))?;
        let request = factory.open_with_u32(self.db_name, DB_VERSION)?;

        let table = self.table;
        let upgrading = request.clone();
        let on_upgrade: EventHandler = Closure::once(move |_: web_sys::Event| {
            let Some(db) = upgrading
                .result()
                .ok()
                .and_then(|db| db.dyn_into::<IdbDatabase>().ok())
            else {
                return;
            };
            if db.object_store_names().contains(table) {
                return;
            }
            let params = IdbObjectStoreParameters::new();
            params.set_key_path(&JsValue::from_str(KEY_PATH));
            match db.create_object_store_with_optional_parameters(table, &params) {
                Ok(_) => log::info!("created table '{}'", table),
                Err(e) => log::error!("failed to create table '{}': {}", table, js_error(e)),
            }
        });
        request.set_onupgradeneeded(Some(on_upgrade.as_ref().unchecked_ref()));

        let opened = await_request(&request).await;
        request.set_onupgradeneeded(None);
        drop(on_upgrade);

        opened?.dyn_into::<IdbDatabase>()
    }

    fn object_store(&self, db: &IdbDatabase, mode: IdbTransactionMode) -> Result<IdbObjectStore, JsValue> {
        db.transaction_with_str_and_mode(self.table, mode)?
            .object_store(self.table)
    }

    /// Open the database, run one request against the table, close it
    async fn run<F>(&self, action: &str, mode: IdbTransactionMode, make_request: F) -> DomainResult<JsValue>
    where
        F: FnOnce(&IdbObjectStore) -> Result<IdbRequest, JsValue>,
    {
        let db = self
            .open()
            .await
            .map_err(|e| DomainError::Storage(format!("open {}: {}", self.db_name, js_error(e))))?;

        let request = self.object_store(&db, mode).and_then(|store| make_request(&store));
        let result = match request {
            Ok(request) => await_request(&request).await,
            Err(e) => Err(e),
        };
        db.close();

        result.map_err(|e| DomainError::Storage(format!("{} on '{}': {}", action, self.table, js_error(e))))
    }
}

impl Default for IdbStore {
    fn default() -> Self {
        Self::new()
    }
}

type EventHandler = Closure<dyn FnMut(web_sys::Event)>;

/// Success and error handlers attached to one request. Dropping this
/// detaches them before the closures themselves are freed.
struct RequestHandlers<'a> {
    request: &'a IdbRequest,
    on_success: Option<EventHandler>,
    on_error: Option<EventHandler>,
}

impl Drop for RequestHandlers<'_> {
    fn drop(&mut self) {
        self.request.set_onsuccess(None);
        self.request.set_onerror(None);
        self.on_success.take();
        self.on_error.take();
    }
}

/// Resolve with the request's result once it succeeds, reject on error
async fn await_request(request: &IdbRequest) -> Result<JsValue, JsValue> {
    let mut handlers = RequestHandlers {
        request,
        on_success: None,
        on_error: None,
    };
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let succeeded = request.clone();
        let on_success: EventHandler = Closure::once(move |_: web_sys::Event| {
            let result = succeeded.result().unwrap_or(JsValue::UNDEFINED);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let failed = request.clone();
        let on_error: EventHandler = Closure::once(move |_: web_sys::Event| {
            let error = failed
                .error()
                .ok()
                .flatten()
                .map(JsValue::from)
                .unwrap_or_else(|| JsValue::from_str("request failed"));
            let _ = reject.call1(&JsValue::NULL, &error);
        });
        request.set_onsuccess(Some(on_success.as_ref().unchecked_ref()));
        request.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        handlers.on_success = Some(on_success);
        handlers.on_error = Some(on_error);
    });
    let settled = JsFuture::from(promise).await;
    drop(handlers);
    settled
}

#[async_trait(?Send)]
impl CollectionStore for IdbStore {
    fn is_supported(&self) -> bool {
        Self::factory().is_some()
    }

    fn table(&self) -> &str {
        self.table
    }

    async fn read_all(&self) -> DomainResult<Vec<ResourceItem>> {
        let records = self
            .run("read", IdbTransactionMode::Readonly, |store| store.get_all())
            .await?;
        serde_wasm_bindgen::from_value(records).map_err(|e| DomainError::Serialization(e.to_string()))
    }

    async fn write(&self, item: &ResourceItem) -> DomainResult<()> {
        let record = serde_wasm_bindgen::to_value(item).map_err(|e| DomainError::Serialization(e.to_string()))?;
        self.run("write", IdbTransactionMode::Readwrite, |store| store.put(&record))
            .await
            .map(|_| ())
    }

    async fn delete(&self, key: &str) -> DomainResult<()> {
        let key = JsValue::from_str(key);
        self.run("delete", IdbTransactionMode::Readwrite, |store| store.delete(&key))
            .await
            .map(|_| ())
    }
}
