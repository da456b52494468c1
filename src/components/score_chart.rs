//! Doughnut chart of the current match score.
//!
//! DESIGN
//! ======
//! The chart instance lives in `AnalysisState::chart`; this component only
//! paints whichever instance is current onto its canvas. A new analysis
//! replaces the instance, which repaints the same canvas from scratch.

use leptos::prelude::*;

use crate::state::analysis::{AnalysisState, format_score};

/// Canvas edge length in device pixels.
const CANVAS_SIZE: u32 = 200;

#[component]
pub fn ScoreChart() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let chart = analysis.with(|state| state.chart.current().cloned());
        let (Some(canvas), Some(chart)) = (canvas_ref.get(), chart) else {
            return;
        };
        if let Err(err) = chart.draw(&canvas) {
            log::error!("chart {} draw failed: {err:?}", chart.id());
        }
    });

    let score_text = move || analysis.with(|state| state.result.as_ref().map(|r| format_score(r.match_score)));

    view! {
        <div class="score-chart">
            <canvas
                class="score-chart__canvas"
                node_ref=canvas_ref
                width=CANVAS_SIZE.to_string()
                height=CANVAS_SIZE.to_string()
                aria-hidden="true"
            ></canvas>
            <span class="score-chart__value">{score_text}</span>
        </div>
    }
}
