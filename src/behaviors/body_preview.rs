//! Body Markdown Preview
//!
//! Re-renders the preview container whenever the body field changes.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use crate::config::UiConfig;
use crate::dom::{self, PageRoot};
use crate::markdown::render_preview;

/// Bind only when both the body field and the preview container exist.
/// Renders once immediately so a pre-filled body has a preview on load.
pub fn bind(root: &PageRoot, config: &UiConfig) {
    let Some(body) = root.find::<Element>(&config.body) else { return };
    let Some(preview) = root.find::<Element>(&config.body_preview) else { return };

    render_into(&preview, &field_value(&body));

    dom::listen(&body, "input", move |ev| {
        if let Some(field) = dom::event_element(&ev) {
            render_into(&preview, &field_value(&field));
        }
    });
}

fn render_into(preview: &Element, text: &str) {
    preview.set_inner_html(&render_preview(text));
}

fn field_value(el: &Element) -> String {
    if let Some(textarea) = el.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else {
        String::new()
    }
}
