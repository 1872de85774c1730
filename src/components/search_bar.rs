//! Search Bar Component
//!
//! Typing filters the page on every keystroke. Enter or the search button
//! sends the query to the selected external engine.

use leptos::prelude::*;

use nav_core::SearchEngine;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = ctx.store;

    let is_blank = move || store.query().with(|q| q.trim().is_empty());
    let submit = move || {
        let query = store.query().get_untracked();
        ctx.search_externally(&query);
    };

    view! {
        <div class="search-bar">
            <div class="search-input-group">
                <input
                    type="text"
                    placeholder="搜索我的收藏或输入关键字进行外部搜索"
                    prop:value=move || store.query().get()
                    on:input=move |ev| {
                        *store.query().write() = event_target_value(&ev);
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button class="search-btn" disabled=is_blank on:click=move |_| submit()>
                    "搜索"
                </button>
            </div>

            <div class="engine-selector">
                {SearchEngine::ALL.into_iter().map(|engine| {
                    let is_selected = move || store.engine().get() == engine;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "engine-btn active" } else { "engine-btn" }
                            on:click=move |_| ctx.set_engine(engine)
                        >
                            {engine.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
