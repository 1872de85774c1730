//! Notice List Component
//!
//! Toast notifications; clicking one dismisses it early.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_remove_notice, AppStateStoreFields};

#[component]
pub fn NoticeList() -> impl IntoView {
    let store = expect_context::<AppContext>().store;

    view! {
        <div class="notice-list">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class() on:click=move |_| store_remove_notice(&store, id)>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
