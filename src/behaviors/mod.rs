//! Page Behaviors
//!
//! Enhancements for server-rendered admin pages. Each behavior owns one DOM
//! concern and silently does nothing when its markup is absent.

mod body_focus;
mod body_preview;
mod bulk_select;
mod confirm;
mod slug_sync;
mod typeahead_fix;

pub use body_focus::{focus_input_at_end, focus_textarea_at_end};
pub use bulk_select::{apply_select_all, default_display, refresh_toolbar, summary};
pub use confirm::{ask as ask_confirm, bind_with as bind_confirm_with};

use crate::config::UiConfig;
use crate::dom::PageRoot;

/// Attach every behavior to `root`. Call once after the markup is in place.
pub fn init_page(root: &PageRoot, config: &UiConfig) {
    slug_sync::bind(root, config);
    body_focus::apply(root, config);
    body_preview::bind(root, config);
    confirm::bind(root, config);
    let fixed = typeahead_fix::apply(root, config);
    bulk_select::bind(root, config);

    web_sys::console::log_1(&format!("[INIT] Page behaviors bound ({} typeahead fixed)", fixed).into());
}
