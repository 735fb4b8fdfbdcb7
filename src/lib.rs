//! Pilosus Admin UI
//!
//! Browser-side behavior for the admin pages: title slugs, body focus and
//! preview, confirm prompts, the upload typeahead fix and bulk selection.

pub mod behaviors;
pub mod components;
pub mod config;
pub mod dom;
pub mod format;
pub mod markdown;
pub mod selection;
pub mod slug;

use wasm_bindgen::prelude::*;

use crate::config::UiConfig;
use crate::dom::PageRoot;

/// Enhance the current document, reading `<body data-ui-config>`
pub fn start() {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        web_sys::console::warn_1(&"[INIT] No document, nothing to bind".into());
        return;
    };
    let config = UiConfig::from_document(&doc);
    if let Some(root) = PageRoot::from_document(&doc) {
        behaviors::init_page(&root, &config);
    }
}

/// Enhance `root` (the whole document when omitted) with an explicit config.
/// Fields missing from `config` keep their defaults.
#[wasm_bindgen]
pub fn init_with(config: JsValue, root: Option<web_sys::Element>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = UiConfig::from_js(config).map_err(|e| JsValue::from_str(&format!("invalid ui config: {}", e)))?;
    let root = match root {
        Some(el) => PageRoot::new(el),
        None => web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| PageRoot::from_document(&doc))
            .ok_or_else(|| JsValue::from_str("no document to bind to"))?,
    };

    behaviors::init_page(&root, &config);
    Ok(())
}
