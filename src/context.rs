//! Application Context
//!
//! The single controller for collection state, provided via Leptos
//! Context API. Components call into it instead of touching storage.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use nav_core::{
    CollectionService, DomainError, ImportReport, ResourceItem, SearchEngine, EXPORT_FILE_NAME,
    EXPORT_MIME_TYPE,
};

use crate::browser::{self, IdbStore};
use crate::models::NoticeKind;
use crate::store::{
    store_push_notice, store_remove_notice, store_set_collection, AppStateStoreFields, AppStore,
};

/// App-wide state and collection actions
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    service: CollectionService<IdbStore>,
}

/// User-facing text for a failed collection action
fn error_message(err: &DomainError) -> String {
    match err {
        DomainError::StorageUnsupported => "当前浏览器不支持本地存储".to_string(),
        e if e.is_import_rejection() => "导入失败, 文件格式错误".to_string(),
        DomainError::InvalidInput(msg) => format!("输入有误: {}", msg),
        other => format!("操作失败: {}", other),
    }
}

/// User-facing summary of a settled import
fn import_message(report: &ImportReport) -> (NoticeKind, String) {
    if report.is_complete() {
        (NoticeKind::Success, "导入完成".to_string())
    } else {
        (
            NoticeKind::Warning,
            format!(
                "导入完成: 共 {}, 成功 {}, 跳过 {}, 失败 {}",
                report.total(),
                report.written,
                report.rejected,
                report.failed
            ),
        )
    }
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            service: CollectionService::new(IdbStore::new()),
        }
    }

    /// Show a notice that dismisses itself
    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let store = self.store;
        let id = store_push_notice(&store, kind, message.into());
        spawn_local(async move {
            TimeoutFuture::new(kind.duration_ms()).await;
            store_remove_notice(&store, id);
        });
    }

    fn report_error(&self, action: &str, err: &DomainError) {
        log::warn!("{} failed: {}", action, err);
        self.notify(NoticeKind::Error, error_message(err));
    }

    /// Re-read the collection from storage
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.service.load().await {
                Ok(items) => store_set_collection(&ctx.store, items),
                Err(e) => ctx.report_error("load", &e),
            }
        });
    }

    /// Save an item; `on_saved` runs after the mirror is refreshed
    pub fn add(&self, item: ResourceItem, on_saved: impl FnOnce() + 'static) {
        let ctx = *self;
        spawn_local(async move {
            let name = item.name.clone();
            match ctx.service.add(item).await {
                Ok(items) => {
                    store_set_collection(&ctx.store, items);
                    ctx.notify(NoticeKind::Success, format!("已添加至我的: {}", name));
                    on_saved();
                }
                Err(e) => ctx.report_error("add", &e),
            }
        });
    }

    /// Remove the item stored under `url`
    pub fn remove(&self, url: String) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.service.remove(&url).await {
                Ok(items) => store_set_collection(&ctx.store, items),
                Err(e) => ctx.report_error("remove", &e),
            }
        });
    }

    /// Import the text of an uploaded file
    pub fn import(&self, text: String) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.service.import(&text).await {
                Ok(outcome) => {
                    store_set_collection(&ctx.store, outcome.items);
                    let (kind, message) = import_message(&outcome.report);
                    ctx.notify(kind, message);
                }
                Err(e) => ctx.report_error("import", &e),
            }
        });
    }

    /// Download the in-memory collection as a JSON file
    pub fn export(&self) {
        let exported = self.store.collection().with_untracked(|c| c.export());
        let result = exported
            .map_err(|e| e.to_string())
            .and_then(|text| browser::download_text(EXPORT_FILE_NAME, EXPORT_MIME_TYPE, &text));
        if let Err(e) = result {
            log::error!("export failed: {}", e);
            self.notify(NoticeKind::Error, format!("导出失败: {}", e));
        }
    }

    /// Select the engine for external search and remember it
    pub fn set_engine(&self, engine: SearchEngine) {
        *self.store.engine().write() = engine;
        if !browser::save_search_engine(engine) {
            log::debug!("search engine preference not persisted");
        }
    }

    /// Send the query to the selected engine; blank queries do nothing
    pub fn search_externally(&self, query: &str) {
        let engine = self.store.engine().get_untracked();
        let Some(url) = engine.search_url(query) else {
            return;
        };
        if let Err(e) = browser::open_in_new_tab(&url) {
            log::error!("failed to open {}: {}", url, e);
            self.notify(NoticeKind::Error, "无法打开搜索页面");
        }
    }
}
