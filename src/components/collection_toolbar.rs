//! Collection Toolbar Component
//!
//! Add, import and export actions for "my collection".

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::AppContext;
use crate::models::NoticeKind;

#[component]
pub fn CollectionToolbar(set_adding: WriteSignal<bool>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |_| {
        let Some(input) = file_input.get() else {
            return;
        };
        spawn_local(async move {
            match browser::read_selected_file(&input).await {
                Ok(Some(text)) => ctx.import(text),
                Ok(None) => log::info!("no file selected"),
                Err(e) => {
                    log::warn!("reading import file failed: {}", e);
                    ctx.notify(NoticeKind::Error, format!("读取文件失败: {}", e));
                }
            }
            // Picking the same file again must fire another change event
            input.set_value("");
        });
    };

    view! {
        <div class="collection-toolbar">
            <button class="toolbar-btn" title="添加至我的" on:click=move |_| set_adding.set(true)>
                "＋"
            </button>
            <button class="toolbar-btn" title="导入" on:click=open_picker>
                "导入"
            </button>
            <button class="toolbar-btn" title="导出" on:click=move |_| ctx.export()>
                "导出"
            </button>
            <input
                type="file"
                accept=".json,application/json"
                class="hidden-file-input"
                node_ref=file_input
                on:change=on_file_change
            />
        </div>
    }
}
