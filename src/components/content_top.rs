//! Content Top Component
//!
//! Header banner with the site title and description.

use leptos::prelude::*;

#[component]
pub fn ContentTop(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <header class="content-top">
            <h1 class="site-title">{title}</h1>
            <p class="site-description">{description}</p>
        </header>
    }
}
