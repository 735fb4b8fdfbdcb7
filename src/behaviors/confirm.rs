//! Destructive Action Confirmation
//!
//! Clicks on confirmable elements ask first; a "no" cancels the click.

use web_sys::Event;

use crate::config::UiConfig;
use crate::dom::PageRoot;

/// Bind with the native `window.confirm` dialog
pub fn bind(root: &PageRoot, config: &UiConfig) {
    bind_with(root, &config.confirm, &config.confirm_message, ask);
    web_sys::console::log_1(&format!("[CONFIRM] Delegated on {}", config.confirm).into());
}

/// Bind with a custom prompt. Delegated on the root, so elements added
/// later are covered as well.
///
/// A declined click is cancelled and stopped at the root: listeners on the
/// document and window never see it, but handlers between the clicked
/// element and the root have already run.
pub fn bind_with<P>(root: &PageRoot, selector: &str, message: &str, prompt: P)
where
    P: Fn(&str) -> bool + 'static,
{
    let message = message.to_string();
    root.delegate("click", selector, move |ev: Event, _el| {
        if !prompt(&message) {
            ev.prevent_default();
            ev.stop_propagation();
        }
    });
}

/// Blocking yes/no dialog. No window or a dialog error counts as "no".
pub fn ask(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
