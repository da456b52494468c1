//! Typed events passed between the analysis and chat controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The analysis controller publishes `AnalysisCompleted` after every
//! successful submission. The chat widget watches `AnalysisEvents` and
//! refreshes its context as soon as the sequence number moves.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::net::types::AnalysisResult;

/// A successful analysis and the input text it was computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisCompleted {
    pub result: AnalysisResult,
    pub resume_text: String,
    pub job_text: String,
}

/// Latest-value channel for `AnalysisCompleted`.
#[derive(Clone, Debug, Default)]
pub struct AnalysisEvents {
    seq: u64,
    latest: Option<AnalysisCompleted>,
}

impl AnalysisEvents {
    pub fn publish(&mut self, event: AnalysisCompleted) {
        self.seq += 1;
        self.latest = Some(event);
    }

    /// Number of events published so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn latest(&self) -> Option<&AnalysisCompleted> {
        self.latest.as_ref()
    }
}
