//! UI Components
//!
//! Reusable Leptos components.

mod add_resource_form;
mod collection_toolbar;
mod content_top;
mod delete_confirm_button;
mod notice_list;
mod resource_panel;
mod search_bar;

pub use add_resource_form::AddResourceForm;
pub use collection_toolbar::CollectionToolbar;
pub use content_top::ContentTop;
pub use delete_confirm_button::DeleteConfirmButton;
pub use notice_list::NoticeList;
pub use resource_panel::ResourcePanel;
pub use search_bar::SearchBar;
