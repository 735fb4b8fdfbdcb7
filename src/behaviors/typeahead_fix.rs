//! Typeahead Display Fix
//!
//! The typeahead wrapper around the upload search field renders inline and
//! breaks the form layout. Tag inputs use the same wrapper and must keep
//! their display, so only wrappers holding the marker field are touched.

use web_sys::Element;

use crate::config::UiConfig;
use crate::dom::{self, PageRoot};

/// Returns how many wrappers were fixed
pub fn apply(root: &PageRoot, config: &UiConfig) -> usize {
    let mut fixed = 0;
    for wrapper in root.find_all::<Element>(&config.typeahead) {
        let has_marker = wrapper.query_selector(&config.typeahead_marker).ok().flatten().is_some();
        if has_marker {
            dom::set_display(&wrapper, "block");
            fixed += 1;
        }
    }
    fixed
}
