//! Body Editor Component
//!
//! Markdown body textarea with a live preview.

use leptos::prelude::*;

use crate::behaviors::focus_textarea_at_end;
use crate::markdown::render_preview;

/// `#body` textarea and `#body-preview` pane.
/// A pre-filled body is focused with the caret at the end once mounted.
#[component]
pub fn BodyEditor(#[prop(optional, into)] initial_body: String) -> impl IntoView {
    let (body, set_body) = signal(initial_body);
    let body_ref = NodeRef::<leptos::html::Textarea>::new();

    Effect::new(move |_| {
        if let Some(field) = body_ref.get() {
            focus_textarea_at_end(&field);
        }
    });

    view! {
        <div class="form-group">
            <label class="control-label" for="body">"Text"</label>
            <textarea
                id="body"
                name="body"
                class="form-control"
                rows="8"
                node_ref=body_ref
                prop:value=move || body.get()
                on:input=move |ev| set_body.set(event_target_value(&ev))
            ></textarea>
        </div>
        <div
            id="body-preview"
            class="flask-pagedown-preview"
            inner_html=move || render_preview(&body.get())
        ></div>
    }
}
