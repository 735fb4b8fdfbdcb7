//! Body Field Focus
//!
//! Puts the caret at the end of a pre-filled body field on page load.

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::config::UiConfig;
use crate::dom::PageRoot;

/// Focus the body field if it already holds text. Runs once.
pub fn apply(root: &PageRoot, config: &UiConfig) {
    let Some(body) = root.find::<web_sys::Element>(&config.body) else { return };

    if let Some(textarea) = body.dyn_ref::<HtmlTextAreaElement>() {
        focus_textarea_at_end(textarea);
    } else if let Some(input) = body.dyn_ref::<HtmlInputElement>() {
        focus_input_at_end(input);
    }
}

/// Focus and collapse the selection to the end of the text.
/// Returns false (and does nothing) when the field is empty.
pub fn focus_textarea_at_end(field: &HtmlTextAreaElement) -> bool {
    let Some(end) = caret_end(&field.value()) else { return false };
    let _ = field.focus();
    let _ = field.set_selection_range(end, end);
    true
}

pub fn focus_input_at_end(field: &HtmlInputElement) -> bool {
    let Some(end) = caret_end(&field.value()) else { return false };
    let _ = field.focus();
    let _ = field.set_selection_range(end, end);
    true
}

/// Caret offset after the last character, in UTF-16 units as the DOM counts
fn caret_end(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }
    Some(text.encode_utf16().count() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_end() {
        assert_eq!(caret_end(""), None);
        assert_eq!(caret_end("draft text"), Some(10));
        assert_eq!(caret_end("привет"), Some(6));
        // astral chars take two UTF-16 units
        assert_eq!(caret_end("a😀"), Some(3));
    }
}
