//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the analysis form, results, and chat widget while
//! reading/writing shared state from Leptos context providers.

pub mod chat_widget;
pub mod input_panel;
pub mod results_panel;
pub mod score_chart;
pub mod skill_list;
