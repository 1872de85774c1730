//! Add Resource Form Component
//!
//! Drawer form for saving a custom link to "my collection".

use leptos::prelude::*;

use nav_core::ResourceItem;

use crate::context::AppContext;

#[component]
fn FormField(
    label: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type="text"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn AddResourceForm(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (name, set_name) = signal(String::new());
    let (url, set_url) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (image, set_image) = signal(String::new());

    let close = move || {
        set_name.set(String::new());
        set_url.set(String::new());
        set_description.set(String::new());
        set_image.set(String::new());
        set_open.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item = ResourceItem {
            name: name.get(),
            description: Some(description.get()),
            url: url.get(),
            image: Some(image.get()),
        };
        // Blank optional fields are dropped by the service
        ctx.add(item, close);
    };

    view! {
        <Show when=move || open.get()>
            <div class="drawer">
                <form class="add-resource-form" on:submit=on_submit>
                    <h3>"添加至我的"</h3>
                    <FormField label="名称" placeholder="GitHub" value=name set_value=set_name required=true />
                    <FormField label="网址" placeholder="https://github.com" value=url set_value=set_url required=true />
                    <FormField label="描述" placeholder="可选" value=description set_value=set_description />
                    <FormField label="图标" placeholder="可选, 默认使用网站 favicon" value=image set_value=set_image />
                    <div class="form-actions">
                        <button type="submit">"保存"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| close()>"取消"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
