//! Title -> Alias Sync
//!
//! Keeps the alias input equal to the slug of the title input.

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::config::UiConfig;
use crate::dom::{self, PageRoot};
use crate::slug::derive_slug;

/// Bind the title input so every keystroke rewrites the alias.
/// No-op when either input is missing.
pub fn bind(root: &PageRoot, config: &UiConfig) {
    let Some(title) = root.find::<HtmlInputElement>(&config.title) else { return };
    if root.find::<HtmlInputElement>(&config.alias).is_none() {
        web_sys::console::log_1(&format!("[SLUG] No {} input, alias sync skipped", config.alias).into());
        return;
    }

    // keyup for typing, input for paste and autofill
    for event in ["keyup", "input"] {
        let root = root.clone();
        let alias_selector = config.alias.clone();
        dom::listen(&title, event, move |ev| {
            let Some(title) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else { return };
            // Looked up per event so a re-rendered alias input still gets the value
            if let Some(alias) = root.find::<HtmlInputElement>(&alias_selector) {
                alias.set_value(&derive_slug(&title.value()));
            }
        });
    }

    web_sys::console::log_1(&format!("[SLUG] {} -> {} bound", config.title, config.alias).into());
}
