//! Confirm Button Component
//!
//! Button that asks before running a destructive action.

use leptos::prelude::*;

use crate::behaviors::ask_confirm;
use crate::config::UiConfig;

/// Runs `on_confirm` only when the prompt is accepted
///
/// # Arguments
/// * `label` - Button text
/// * `button_class` - CSS classes, `btn btn-danger` by default
/// * `message` - Prompt text, "Are you sure?" by default
/// * `prompt` - Replaces the native `window.confirm` dialog
/// * `on_confirm` - Callback to execute when the user accepts
///
/// The button does not carry the page-level `.confirm` class; it asks on its
/// own and would otherwise prompt twice on enhanced pages.
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(optional, into)] button_class: Option<String>,
    #[prop(optional, into)] message: Option<String>,
    #[prop(optional)] prompt: Option<Callback<String, bool>>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let message = message.unwrap_or_else(|| UiConfig::default().confirm_message);
    let button_class = button_class.unwrap_or_else(|| "btn btn-danger".to_string());

    view! {
        <button
            type="button"
            class=button_class
            on:click=move |ev| {
                let accepted = match prompt {
                    Some(prompt) => prompt.run(message.clone()),
                    None => ask_confirm(&message),
                };
                if accepted {
                    on_confirm.run(());
                } else {
                    ev.prevent_default();
                    ev.stop_propagation();
                }
            }
        >
            {label}
        </button>
    }
}
