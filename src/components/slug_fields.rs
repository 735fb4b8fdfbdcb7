//! Slug Fields Component
//!
//! Title and alias inputs; the alias follows the title.

use leptos::prelude::*;

use crate::slug::derive_slug;

/// `#title` and `#alias` inputs for a post form
///
/// Every title keystroke overwrites the alias. The alias can still be edited
/// by hand until the title changes again.
#[component]
pub fn SlugFields(
    #[prop(optional, into)] initial_title: String,
    /// Defaults to the slug of `initial_title`
    #[prop(optional, into)] initial_alias: Option<String>,
) -> impl IntoView {
    let initial_alias = initial_alias.unwrap_or_else(|| derive_slug(&initial_title));
    let (title, set_title) = signal(initial_title);
    let (alias, set_alias) = signal(initial_alias);

    view! {
        <div class="form-group">
            <label class="control-label" for="title">"Title"</label>
            <input
                type="text"
                id="title"
                name="title"
                class="form-control"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_alias.set(derive_slug(&value));
                    set_title.set(value);
                }
            />
        </div>
        <div class="form-group">
            <label class="control-label" for="alias">"Alias"</label>
            <input
                type="text"
                id="alias"
                name="alias"
                class="form-control"
                prop:value=move || alias.get()
                on:input=move |ev| set_alias.set(event_target_value(&ev))
            />
        </div>
    }
}
