//! Bulk Select List Component
//!
//! Checkbox list with select-all and a toolbar for the selected rows.

use std::collections::BTreeSet;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::format::pluralize;
use crate::selection::SelectionSummary;

/// One selectable row
#[derive(Debug, Clone, PartialEq)]
pub struct SelectableRow {
    pub id: u32,
    pub label: String,
}

impl SelectableRow {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self { id, label: label.into() }
    }
}

/// Rows with `.ctrl-item-select` checkboxes, a `#select_all` checkbox and an
/// `.on-check` toolbar that exists only while something is selected.
///
/// Props:
/// - rows: Rows to render, in display order
/// - action_label: Toolbar button text
/// - on_action: Receives the selected ids in row order
#[component]
pub fn BulkSelectList(
    #[prop(into)] rows: Signal<Vec<SelectableRow>>,
    #[prop(optional, into)] action_label: Option<String>,
    #[prop(into)] on_action: Callback<Vec<u32>>,
) -> impl IntoView {
    let selected = RwSignal::new(BTreeSet::<u32>::new());
    let action_label = action_label.unwrap_or_else(|| "Delete selected".to_string());

    // Rows that disappeared do not count as selected
    let summary = Memo::new(move |_| {
        selected.with(|sel| {
            rows.with(|rows| SelectionSummary::from_states(rows.iter().map(|row| sel.contains(&row.id))))
        })
    });

    let selected_ids = move || {
        selected.with(|sel| {
            rows.with(|rows| rows.iter().map(|row| row.id).filter(|id| sel.contains(id)).collect::<Vec<_>>())
        })
    };

    let toggle_all = move |ev: web_sys::Event| {
        if rows.with(|rows| rows.is_empty()) {
            // Nothing to select; the box would otherwise stay checked
            if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                input.set_checked(false);
            }
            return;
        }
        if event_target_checked(&ev) {
            selected.set(rows.with(|rows| rows.iter().map(|row| row.id).collect()));
        } else {
            selected.set(BTreeSet::new());
        }
    };

    view! {
        <div class="bulk-select">
            <table class="table">
                <thead>
                    <tr>
                        <th>
                            <input
                                type="checkbox"
                                id="select_all"
                                prop:checked=move || summary.get().all_selected()
                                on:change=toggle_all
                            />
                        </th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.id
                        children=move |row| {
                            let id = row.id;
                            view! {
                                <tr>
                                    <td>
                                        <input
                                            type="checkbox"
                                            class="ctrl-item-select"
                                            value=id.to_string()
                                            prop:checked=move || selected.with(|sel| sel.contains(&id))
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                selected.update(|sel| {
                                                    if checked {
                                                        sel.insert(id);
                                                    } else {
                                                        sel.remove(&id);
                                                    }
                                                });
                                            }
                                        />
                                    </td>
                                    <td>{row.label}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || summary.get().any_selected()>
                <div class="on-check">
                    <span class="selected-count">
                        {move || {
                            let n = summary.get().checked;
                            format!("{} item{} selected", n, pluralize(n, "", "s"))
                        }}
                    </span>
                    <button
                        type="button"
                        class="btn btn-danger"
                        on:click=move |_| on_action.run(selected_ids())
                    >
                        {action_label.clone()}
                    </button>
                </div>
            </Show>
        </div>
    }
}
