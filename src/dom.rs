//! DOM Helpers
//!
//! Thin typed wrapper over web-sys for querying and listening inside a root
//! container. Lookups that fail for any reason come back as `None` or an
//! empty list so callers can treat missing markup as "nothing to do".

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement, HtmlInputElement};

/// Container all page behaviors are scoped to
#[derive(Clone)]
pub struct PageRoot {
    node: Element,
}

impl PageRoot {
    pub fn new(node: Element) -> Self {
        Self { node }
    }

    /// Root at `<html>` of the given document
    pub fn from_document(doc: &web_sys::Document) -> Option<Self> {
        doc.document_element().map(Self::new)
    }

    pub fn element(&self) -> &Element {
        &self.node
    }

    /// First descendant matching `selector`, cast to `T`
    pub fn find<T: JsCast>(&self, selector: &str) -> Option<T> {
        match self.node.query_selector(selector) {
            Ok(found) => found.and_then(|el| el.dyn_into::<T>().ok()),
            Err(_) => {
                warn_bad_selector(selector);
                None
            }
        }
    }

    /// All descendants matching `selector` that cast to `T`
    pub fn find_all<T: JsCast>(&self, selector: &str) -> Vec<T> {
        let list = match self.node.query_selector_all(selector) {
            Ok(list) => list,
            Err(_) => {
                warn_bad_selector(selector);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<T>().ok())
            .collect()
    }

    /// Listen on the root itself. Events from descendants arrive by bubbling.
    pub fn listen<F>(&self, event: &str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        listen(&self.node, event, handler);
    }

    /// Delegated listener: `handler` gets the event and the closest ancestor
    /// of its target (inside this root) that matches `selector`.
    pub fn delegate<F>(&self, event: &str, selector: &str, mut handler: F)
    where
        F: FnMut(Event, Element) + 'static,
    {
        let root = self.node.clone();
        let selector = selector.to_string();
        self.listen(event, move |ev: Event| {
            let Some(target) = event_element(&ev) else { return };
            if let Some(matched) = closest(&target, &selector) {
                if root.contains(Some(matched.as_ref())) {
                    handler(ev, matched);
                }
            }
        });
    }
}

/// Attach `handler` to `target` for the life of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Event target as an element (text nodes and windows are skipped)
pub fn event_element(ev: &Event) -> Option<Element> {
    ev.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// `Element::closest`, with invalid selectors treated as no match
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// `Element::matches`, with invalid selectors treated as no match
pub fn matches(el: &Element, selector: &str) -> bool {
    el.matches(selector).unwrap_or(false)
}

/// Checked state of a checkbox; other elements are never checked
pub fn is_checked(el: &Element) -> bool {
    el.dyn_ref::<HtmlInputElement>().is_some_and(|input| input.checked())
}

/// Set an inline `display` value
pub fn set_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", value);
    }
}

/// Drop an inline `display`, falling back to the stylesheet
pub fn clear_display(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().remove_property("display");
    }
}

/// Display value after stylesheets are applied
pub fn computed_display(el: &Element) -> Option<String> {
    web_sys::window()?
        .get_computed_style(el)
        .ok()
        .flatten()?
        .get_property_value("display")
        .ok()
}

fn warn_bad_selector(selector: &str) {
    web_sys::console::warn_1(&format!("[DOM] Invalid selector: {}", selector).into());
}
