//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpBackend;
use crate::pages::home::HomePage;
use crate::state::{analysis::AnalysisState, chat::ChatState, events::AnalysisEvents};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::default();
    log::info!("backend endpoints: {} {}", config.analyze_endpoint, config.chat_endpoint);

    provide_context(RwSignal::new(AnalysisState::default()));
    provide_context(RwSignal::new(ChatState::new(&config)));
    provide_context(RwSignal::new(AnalysisEvents::default()));
    provide_context(HttpBackend::new(config));

    view! {
        <Title text="CapaBot - Resume Match Analyzer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
