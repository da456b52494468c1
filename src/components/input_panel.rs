//! Resume / job description input with text and file modes.

#[cfg(test)]
#[path = "input_panel_test.rs"]
mod input_panel_test;

use leptos::prelude::*;

use crate::state::analysis::{AnalysisState, InputField, InputMode};

pub fn placeholder(field: InputField) -> &'static str {
    match field {
        InputField::Resume => "Paste your resume here...",
        InputField::Job => "Paste the job description here...",
    }
}

/// Caption under the file picker.
pub fn file_status(file_name: Option<&str>) -> String {
    match file_name {
        Some(name) => format!("Selected: {name}"),
        None => "No file chosen".to_owned(),
    }
}

/// Input card for one field. Only the file name is kept in file mode; the
/// analysis always posts the text area contents.
#[component]
pub fn InputPanel(field: InputField) -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();

    let mode = move || analysis.with(|state| state.input(field).mode);
    let text = move || analysis.with(|state| state.input(field).text.clone());
    let file_name = move || analysis.with(|state| state.input(field).file_name.clone());

    let tab = move |target: InputMode, label: &'static str| {
        view! {
            <button
                class="input-panel__tab"
                class:input-panel__tab--active=move || mode() == target
                on:click=move |_| analysis.update(|state| state.switch_input(field, target))
            >
                {label}
            </button>
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let name = selected_file_name(&ev);
        if let Some(name) = name.as_deref() {
            log::info!("{} file selected: {name}", field.label());
        }
        analysis.update(|state| state.select_file(field, name));
    };

    view! {
        <div class="input-panel">
            <div class="input-panel__header">
                <h2 class="input-panel__title">{field.label()}</h2>
                <div class="input-panel__tabs">
                    {tab(InputMode::Text, "Paste Text")}
                    {tab(InputMode::File, "Upload File")}
                </div>
            </div>
            <Show
                when=move || mode() == InputMode::Text
                fallback=move || {
                    view! {
                        <label class="input-panel__file">
                            <input type="file" accept=".txt,.pdf,.doc,.docx" on:change=on_file_change />
                            <span class="input-panel__file-status">
                                {move || file_status(file_name().as_deref())}
                            </span>
                        </label>
                    }
                }
            >
                <textarea
                    class="input-panel__textarea"
                    placeholder=placeholder(field)
                    prop:value=text
                    on:input=move |ev| analysis.update(|state| state.set_text(field, event_target_value(&ev)))
                ></textarea>
            </Show>
        </div>
    }
}

#[cfg(feature = "csr")]
fn selected_file_name(ev: &leptos::ev::Event) -> Option<String> {
    let input = event_target::<web_sys::HtmlInputElement>(ev);
    input.files()?.get(0).map(|file| file.name())
}

#[cfg(not(feature = "csr"))]
fn selected_file_name(_ev: &leptos::ev::Event) -> Option<String> {
    None
}
