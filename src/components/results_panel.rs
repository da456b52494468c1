//! Results section: score, tier feedback, chart, and skill columns.

use leptos::prelude::*;

use crate::components::score_chart::ScoreChart;
use crate::components::skill_list::{SkillKind, SkillList};
use crate::state::analysis::{AnalysisState, MatchTier, format_score};

/// Hidden until the first successful analysis; scrolls itself into view
/// after each one.
#[component]
pub fn ResultsPanel() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let section_ref = NodeRef::<leptos::html::Section>::new();

    Effect::new(move || {
        let seq = analysis.with(|state| state.reveal_seq);
        if seq == 0 {
            return;
        }

        #[cfg(feature = "csr")]
        {
            if let Some(el) = section_ref.get() {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    let has_result = move || analysis.with(|state| state.result.is_some());
    let score = move || analysis.with(|state| state.result.as_ref().map(|r| format_score(r.match_score)));
    let tier = move || analysis.with(AnalysisState::tier);

    view! {
        <section class="results" class:results--visible=has_result node_ref=section_ref>
            <Show when=has_result>
                <div class="results__summary">
                    <ScoreChart />
                    <div class="results__score">
                        <span class="results__score-value">{score}</span>
                        {move || {
                            tier()
                                .map(|tier: MatchTier| {
                                    view! {
                                        <p class=format!("results__feedback results__feedback--{}", tier.css_modifier())>
                                            {tier.feedback()}
                                        </p>
                                    }
                                })
                        }}
                    </div>
                </div>
                <div class="results__skills">
                    {move || {
                        let (matching, missing) = analysis
                            .with(|state| {
                                state
                                    .result
                                    .as_ref()
                                    .map(|r| (r.matching_skills.clone(), r.missing_skills.clone()))
                                    .unwrap_or_default()
                            });
                        view! {
                            <SkillList kind=SkillKind::Matching skills=matching />
                            <SkillList kind=SkillKind::Missing skills=missing />
                        }
                    }}
                </div>
            </Show>
        </section>
    }
}
