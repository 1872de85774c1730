//! Nav-Page Frontend App
//!
//! Owns the application state and lays out the search bar, the
//! "my collection" panel and the catalog panels.

use leptos::prelude::*;
use reactive_stores::Store;

use nav_core::{builtin_catalog, builtin_site, search};

use crate::browser;
use crate::components::{
    AddResourceForm, CollectionToolbar, ContentTop, NoticeList, ResourcePanel, SearchBar,
};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store);
    provide_context(ctx);

    let site = builtin_site();
    browser::set_document_title(&site.title);
    let catalog = StoredValue::new(builtin_catalog());
    let (adding, set_adding) = signal(false);

    // Hydrate the collection mirror on mount
    Effect::new(move |_| ctx.reload());

    let filtered_catalog = Memo::new(move |_| {
        let query = store.query().get();
        catalog.with_value(|resources| search::filter_resources(resources, &query))
    });
    let my_collection = Memo::new(move |_| {
        let query = store.query().get();
        store.collection().with(|c| c.filtered_resource(&query))
    });
    // While searching, an empty "my collection" is dropped like any category
    let show_my_collection = move || {
        store.query().with(|q| q.trim().is_empty()) || !my_collection.with(|r| r.is_empty())
    };

    view! {
        <div class="app-layout">
            <NoticeList />

            <main class="main-content">
                <SearchBar />
                <ContentTop title=site.title description=site.description />
                <CollectionToolbar set_adding=set_adding />

                <Show when=show_my_collection>
                    {move || view! {
                        <ResourcePanel
                            resource=my_collection.get()
                            has_delete_btn=true
                            empty_hint="还没有收藏, 点击 ＋ 添加或导入"
                        />
                    }}
                </Show>

                {move || filtered_catalog.get().into_iter().map(|resource| view! {
                    <ResourcePanel resource=resource has_collect_btn=true />
                }).collect_view()}

                <p class="item-count">
                    {move || format!(
                        "{} 个分类, 我的收藏 {} 项",
                        filtered_catalog.with(|c| c.len()),
                        store.collection().with(|c| c.len()),
                    )}
                </p>
            </main>

            <AddResourceForm open=adding set_open=set_adding />
        </div>
    }
}
