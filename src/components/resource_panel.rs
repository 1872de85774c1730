//! Resource Panel Component
//!
//! One category rendered as a card grid. Catalog panels offer a collect
//! button per link, the "my collection" panel a confirmed delete.

use leptos::prelude::*;

use nav_core::{Resource, ResourceItem};

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
fn ResourceCard(item: ResourceItem, has_collect_btn: bool, has_delete_btn: bool) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let icon = item.icon_url();

    let collect = has_collect_btn.then(|| {
        let key = item.url.clone();
        let collected = Memo::new(move |_| ctx.store.collection().with(|c| c.contains(&key)));
        let item = item.clone();
        view! {
            <button
                class="collect-btn"
                title="添加至我的"
                disabled=move || collected.get()
                on:click=move |_| ctx.add(item.clone(), || {})
            >
                {move || if collected.get() { "已收藏" } else { "收藏" }}
            </button>
        }
    });

    let delete = has_delete_btn.then(|| {
        let url = item.url.clone();
        view! {
            <DeleteConfirmButton
                button_class="delete-btn"
                prompt="移除?"
                on_confirm=move |_| ctx.remove(url.clone())
            />
        }
    });

    view! {
        <div class="resource-card">
            <a class="resource-link" href=item.url.clone() target="_blank" rel="noopener noreferrer" title=item.url.clone()>
                <img class="resource-icon" src=icon alt="" loading="lazy" />
                <div class="resource-text">
                    <span class="resource-name">{item.name.clone()}</span>
                    {item.description.clone().map(|d| view! { <span class="resource-description">{d}</span> })}
                </div>
            </a>
            <div class="resource-actions">
                {collect}
                {delete}
            </div>
        </div>
    }
}

#[component]
pub fn ResourcePanel(
    resource: Resource,
    #[prop(optional)] has_collect_btn: bool,
    #[prop(optional)] has_delete_btn: bool,
    /// Shown instead of the grid when the panel has no items
    #[prop(optional, into)]
    empty_hint: Option<String>,
) -> impl IntoView {
    let Resource { name, site, icon } = resource;
    let body = if site.is_empty() {
        view! { <p class="panel-empty">{empty_hint.unwrap_or_default()}</p> }.into_any()
    } else {
        view! {
            <div class="resource-grid">
                {site.into_iter().map(|item| view! {
                    <ResourceCard item=item has_collect_btn=has_collect_btn has_delete_btn=has_delete_btn />
                }).collect_view()}
            </div>
        }.into_any()
    };

    view! {
        <section class="resource-panel" data-icon=icon>
            <h2 class="panel-title">{name}</h2>
            {body}
        </section>
    }
}
