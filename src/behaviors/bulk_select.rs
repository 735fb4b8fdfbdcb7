//! Bulk Selection
//!
//! Select-all checkbox plus a toolbar that is visible while any item
//! checkbox is checked. Everything is read back from the DOM on each
//! change event; nothing is cached between events.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::config::UiConfig;
use crate::dom::{self, PageRoot};
use crate::selection::SelectionSummary;

/// One delegated `change` listener on the root. Select-all propagation runs
/// before the toolbar update so the toolbar sees the propagated state.
pub fn bind(root: &PageRoot, config: &UiConfig) {
    let page = root.clone();
    let config = config.clone();

    let visible = refresh_toolbar(&page, &config);
    web_sys::console::log_1(&format!("[BULK] Bound, {} selected, toolbar visible={}", summary(&page, &config).checked, visible).into());

    root.listen("change", move |ev: Event| {
        let Some(target) = dom::event_element(&ev) else { return };
        // Only checkboxes drive selection; other inputs matching the selectors are ignored
        if target.dyn_ref::<HtmlInputElement>().is_none() {
            return;
        }

        let is_master = dom::matches(&target, &config.select_all);
        if is_master {
            apply_select_all(&page, &config, dom::is_checked(&target));
        }
        if is_master || dom::matches(&target, &config.item_select) {
            refresh_toolbar(&page, &config);
        }
    });
}

/// Check every item, or clear every item's checked attribute and state
pub fn apply_select_all(root: &PageRoot, config: &UiConfig, checked: bool) {
    for item in root.find_all::<HtmlInputElement>(&config.item_select) {
        if !checked {
            let _ = item.remove_attribute("checked");
        }
        item.set_checked(checked);
    }
}

/// Current state of the item checkboxes
pub fn summary(root: &PageRoot, config: &UiConfig) -> SelectionSummary {
    let items = root.find_all::<HtmlInputElement>(&config.item_select);
    SelectionSummary::from_states(items.iter().map(|item| item.checked()))
}

/// Show the toolbar if anything is selected, hide it otherwise
pub fn refresh_toolbar(root: &PageRoot, config: &UiConfig) -> bool {
    let visible = summary(root, config).any_selected();
    for toolbar in root.find_all::<Element>(&config.toolbar) {
        if visible {
            show(&toolbar);
        } else {
            dom::set_display(&toolbar, "none");
        }
    }
    visible
}

/// Undo an inline hide. If the stylesheet hides the element too, fall back
/// to the default display for its tag.
fn show(el: &Element) {
    dom::clear_display(el);
    if dom::computed_display(el).as_deref() == Some("none") {
        dom::set_display(el, default_display(&el.tag_name()));
    }
}

/// User-agent default `display` for a tag name
pub fn default_display(tag: &str) -> &'static str {
    match tag.to_ascii_lowercase().as_str() {
        "a" | "abbr" | "b" | "code" | "em" | "i" | "img" | "label" | "small" | "span" | "strong" => "inline",
        "button" | "input" | "select" | "textarea" => "inline-block",
        "li" => "list-item",
        "table" => "table",
        "thead" => "table-header-group",
        "tbody" => "table-row-group",
        "tfoot" => "table-footer-group",
        "tr" => "table-row",
        "td" | "th" => "table-cell",
        _ => "block",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_display() {
        assert_eq!(default_display("DIV"), "block");
        assert_eq!(default_display("span"), "inline");
        assert_eq!(default_display("BUTTON"), "inline-block");
        assert_eq!(default_display("TR"), "table-row");
        assert_eq!(default_display("td"), "table-cell");
        assert_eq!(default_display("li"), "list-item");
        assert_eq!(default_display("nav"), "block");
    }
}
