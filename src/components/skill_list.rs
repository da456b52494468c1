//! Matching/missing skill columns with a staggered reveal.

#[cfg(test)]
#[path = "skill_list_test.rs"]
mod skill_list_test;

use leptos::prelude::*;

/// Seconds between the reveal of consecutive skill tags.
const REVEAL_STEP_SECS: f64 = 0.1;

/// Which column a list renders; drives the tag styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillKind {
    Matching,
    Missing,
}

impl SkillKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Matching => "Matching Skills",
            Self::Missing => "Missing Skills",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Matching => "skill-tag--matching",
            Self::Missing => "skill-tag--missing",
        }
    }
}

/// CSS `animation-delay` for the tag at `index`, e.g. `0.3s`.
pub fn reveal_delay(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let secs = index as f64 * REVEAL_STEP_SECS;
    format!("{secs:.1}s")
}

/// One skill column. An empty list renders a muted placeholder.
#[component]
pub fn SkillList(kind: SkillKind, skills: Vec<String>) -> impl IntoView {
    let body = if skills.is_empty() {
        view! { <p class="skill-list__empty">"No skills found"</p> }.into_any()
    } else {
        skills
            .into_iter()
            .enumerate()
            .map(|(index, skill)| {
                view! {
                    <span class=format!("skill-tag {}", kind.css_modifier()) style:animation-delay=reveal_delay(index)>
                        {skill}
                    </span>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="skill-list">
            <h3 class="skill-list__title">{kind.title()}</h3>
            <div class="skill-list__tags">{body}</div>
        </div>
    }
}
