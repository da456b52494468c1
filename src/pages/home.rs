//! Landing page: the analysis form, results, and the chat widget.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::input_panel::InputPanel;
use crate::components::results_panel::ResultsPanel;
use crate::controllers::analysis::submit_analysis;
use crate::net::api::HttpBackend;
use crate::state::analysis::{AnalysisState, InputField};
use crate::state::events::AnalysisEvents;

/// Label of the analyze button for the given loading state.
pub fn analyze_label(loading: bool) -> &'static str {
    if loading { "Analyzing..." } else { "Analyze Match" }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let events = expect_context::<RwSignal<AnalysisEvents>>();
    let backend = StoredValue::new(expect_context::<HttpBackend>());

    let loading = move || analysis.with(|state| state.loading);

    let on_analyze = move |_| {
        if loading() {
            return;
        }
        let backend = backend.get_value();
        leptos::task::spawn_local(async move {
            if let Ok(completed) = submit_analysis(&backend, &analysis, &events).await {
                log::debug!("results rendered for {}% match", completed.result.match_score);
            }
        });
    };

    let on_sample = move |_| {
        analysis.update(AnalysisState::load_sample_data);
        log::info!("sample data loaded");
    };

    view! {
        <main class="home">
            <header class="home__header">
                <h1 class="home__title">"CapaBot"</h1>
                <p class="home__subtitle">"See how well your resume matches a job, then ask the assistant what to do next."</p>
            </header>

            <section class="home__inputs">
                <InputPanel field=InputField::Resume />
                <InputPanel field=InputField::Job />
            </section>

            <div class="home__actions">
                <button class="btn btn--primary" on:click=on_analyze disabled=loading>
                    {move || analyze_label(loading())}
                </button>
                <button class="btn" on:click=on_sample disabled=loading>
                    "Load Sample Data"
                </button>
            </div>

            <Show when=loading>
                <div class="home__loading" role="status">
                    <span class="home__spinner"></span>
                    "Analyzing your match..."
                </div>
            </Show>

            {move || {
                analysis
                    .with(|state| state.notice.clone())
                    .map(|notice| view! { <p class="home__notice">{notice}</p> })
            }}

            <ResultsPanel />
        </main>
        <ChatWidget />
    }
}
