//! UI Components
//!
//! Leptos versions of the admin form widgets. They render the same ids and
//! classes as the server templates, for pages built in Rust instead.

mod body_editor;
mod bulk_select_list;
mod confirm_button;
mod slug_fields;

pub use body_editor::BodyEditor;
pub use bulk_select_list::{BulkSelectList, SelectableRow};
pub use confirm_button::ConfirmButton;
pub use slug_fields::SlugFields;
